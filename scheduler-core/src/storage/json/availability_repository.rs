use crate::domain::mappers::AvailabilityMapper;
use crate::domain::models::availability::Availability as DomainAvailability;
use crate::storage::traits::{KeyValueStore, AVAILABILITIES_KEY};
use anyhow::Result;
use log::{debug, warn};
use shared::Availability as SharedAvailability;
use std::sync::{Arc, Mutex};

/// JSON-backed availability repository.
///
/// Mirrors `MemberRepository`: the collection lives in memory and every
/// mutation rewrites the persisted document. Individual records that fail to
/// parse on load are skipped so one broken entry cannot take the rest down.
#[derive(Clone)]
pub struct AvailabilityRepository {
    store: Arc<dyn KeyValueStore>,
    availabilities: Arc<Mutex<Vec<DomainAvailability>>>,
}

impl AvailabilityRepository {
    /// Create a new availability repository, loading whatever the store holds
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let availabilities = Self::load_availabilities(store.as_ref())?;
        Ok(Self {
            store,
            availabilities: Arc::new(Mutex::new(availabilities)),
        })
    }

    /// Load the availability collection from the store.
    /// A malformed document falls back to empty; a malformed record is skipped.
    fn load_availabilities(store: &dyn KeyValueStore) -> Result<Vec<DomainAvailability>> {
        let raw = match store.get(AVAILABILITIES_KEY)? {
            Some(raw) => raw,
            None => {
                debug!("No availability data stored yet, starting with an empty schedule");
                return Ok(Vec::new());
            }
        };

        let dtos: Vec<SharedAvailability> = match serde_json::from_str(&raw) {
            Ok(dtos) => dtos,
            Err(e) => {
                warn!(
                    "Stored availability data is malformed, starting with an empty schedule: {}",
                    e
                );
                return Ok(Vec::new());
            }
        };

        let mut availabilities = Vec::new();
        for dto in dtos {
            match AvailabilityMapper::to_domain(dto) {
                Ok(availability) => availabilities.push(availability),
                Err(e) => {
                    warn!("Skipping unreadable availability entry: {}", e);
                }
            }
        }

        debug!("Loaded {} availability entries", availabilities.len());
        Ok(availabilities)
    }

    /// Serialize the full collection back through the adapter
    fn persist(&self, availabilities: &[DomainAvailability]) -> Result<()> {
        let dtos: Vec<SharedAvailability> = availabilities
            .iter()
            .cloned()
            .map(AvailabilityMapper::to_dto)
            .collect();
        let raw = serde_json::to_string(&dtos)?;
        self.store.set(AVAILABILITIES_KEY, &raw)
    }

    /// Store a new availability entry
    pub fn store_availability(&self, availability: &DomainAvailability) -> Result<()> {
        let mut availabilities = self.availabilities.lock().unwrap();
        availabilities.push(availability.clone());
        self.persist(&availabilities)
    }

    /// Retrieve a specific availability entry by ID
    pub fn get_availability(&self, availability_id: &str) -> Result<Option<DomainAvailability>> {
        let availabilities = self.availabilities.lock().unwrap();
        Ok(availabilities
            .iter()
            .find(|a| a.id == availability_id)
            .cloned())
    }

    /// List all availability entries in the order they were added
    pub fn list_availabilities(&self) -> Result<Vec<DomainAvailability>> {
        let availabilities = self.availabilities.lock().unwrap();
        Ok(availabilities.clone())
    }

    /// Update an existing availability entry in place
    pub fn update_availability(&self, updated: &DomainAvailability) -> Result<()> {
        let mut availabilities = self.availabilities.lock().unwrap();
        match availabilities.iter_mut().find(|a| a.id == updated.id) {
            Some(entry) => *entry = updated.clone(),
            None => {
                warn!("Attempted to update a non-existent availability: {}", updated.id);
                return Err(anyhow::anyhow!("Availability not found for update"));
            }
        }
        self.persist(&availabilities)
    }

    /// Delete a single availability entry
    /// Returns true if the entry was found and deleted, false otherwise
    pub fn delete_availability(&self, availability_id: &str) -> Result<bool> {
        let mut availabilities = self.availabilities.lock().unwrap();
        let count_before = availabilities.len();
        availabilities.retain(|a| a.id != availability_id);

        if availabilities.len() == count_before {
            return Ok(false);
        }

        self.persist(&availabilities)?;
        Ok(true)
    }

    /// Delete every entry belonging to a member
    /// Returns the number of entries actually deleted
    pub fn delete_for_member(&self, member_id: &str) -> Result<usize> {
        let mut availabilities = self.availabilities.lock().unwrap();
        let count_before = availabilities.len();
        availabilities.retain(|a| a.member_id != member_id);
        let removed = count_before - availabilities.len();

        if removed > 0 {
            self.persist(&availabilities)?;
        }
        Ok(removed)
    }
}
