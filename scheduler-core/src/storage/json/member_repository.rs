use crate::domain::mappers::MemberMapper;
use crate::domain::models::member::FamilyMember as DomainMember;
use crate::storage::traits::{KeyValueStore, MEMBERS_KEY};
use anyhow::Result;
use log::{debug, warn};
use shared::FamilyMember as SharedMember;
use std::sync::{Arc, Mutex};

/// JSON-backed member repository.
///
/// The collection is loaded once at construction and held in memory. Every
/// mutation rewrites the whole collection through the storage adapter, so the
/// persisted document always matches what callers observe.
#[derive(Clone)]
pub struct MemberRepository {
    store: Arc<dyn KeyValueStore>,
    members: Arc<Mutex<Vec<DomainMember>>>,
}

impl MemberRepository {
    /// Create a new member repository, loading whatever the store holds
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let members = Self::load_members(store.as_ref())?;
        Ok(Self {
            store,
            members: Arc::new(Mutex::new(members)),
        })
    }

    /// Load the member collection from the store.
    /// A malformed document is treated as empty rather than an error so that
    /// one bad write can never lock the family out of the app.
    fn load_members(store: &dyn KeyValueStore) -> Result<Vec<DomainMember>> {
        let raw = match store.get(MEMBERS_KEY)? {
            Some(raw) => raw,
            None => {
                debug!("No member data stored yet, starting with an empty roster");
                return Ok(Vec::new());
            }
        };

        let dtos: Vec<SharedMember> = match serde_json::from_str(&raw) {
            Ok(dtos) => dtos,
            Err(e) => {
                warn!("Stored member data is malformed, starting with an empty roster: {}", e);
                return Ok(Vec::new());
            }
        };

        debug!("Loaded {} members", dtos.len());
        Ok(dtos.into_iter().map(MemberMapper::to_domain).collect())
    }

    /// Serialize the full collection back through the adapter
    fn persist(&self, members: &[DomainMember]) -> Result<()> {
        let dtos: Vec<SharedMember> = members.iter().cloned().map(MemberMapper::to_dto).collect();
        let raw = serde_json::to_string(&dtos)?;
        self.store.set(MEMBERS_KEY, &raw)
    }

    /// Store a new member
    pub fn store_member(&self, member: &DomainMember) -> Result<()> {
        let mut members = self.members.lock().unwrap();
        members.push(member.clone());
        self.persist(&members)
    }

    /// Retrieve a specific member by ID
    pub fn get_member(&self, member_id: &str) -> Result<Option<DomainMember>> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| m.id == member_id).cloned())
    }

    /// List all members in the order they were added
    pub fn list_members(&self) -> Result<Vec<DomainMember>> {
        let members = self.members.lock().unwrap();
        Ok(members.clone())
    }

    /// Delete a member by ID
    /// Returns true if the member was found and deleted, false otherwise
    pub fn delete_member(&self, member_id: &str) -> Result<bool> {
        let mut members = self.members.lock().unwrap();
        let count_before = members.len();
        members.retain(|m| m.id != member_id);

        if members.len() == count_before {
            return Ok(false);
        }

        self.persist(&members)?;
        Ok(true)
    }
}
