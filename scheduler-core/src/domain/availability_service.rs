//! Availability service: records which days each family member is free.

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::domain::commands::availabilities::{
    AvailabilityPatch, CreateAvailabilityCommand, CreateAvailabilityResult,
    DeleteAvailabilityCommand, DeleteAvailabilityResult, ListAvailabilitiesResult,
    UpdateAvailabilityCommand, UpdateAvailabilityResult,
};
use crate::domain::member_service::MemberService;
use crate::domain::models::availability::{Availability as DomainAvailability, TimeSlot};
use crate::storage::json::AvailabilityRepository;
use crate::storage::traits::KeyValueStore;

#[derive(Clone)]
pub struct AvailabilityService {
    availability_repository: AvailabilityRepository,
}

impl AvailabilityService {
    /// Create a new AvailabilityService over a storage adapter
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let availability_repository = AvailabilityRepository::new(store)?;
        Ok(Self {
            availability_repository,
        })
    }

    /// Record that a member is free on a day.
    /// When the command names no member, the currently selected member is used;
    /// with no selection either, this is an error.
    pub fn create_availability(
        &self,
        command: CreateAvailabilityCommand,
        member_service: &MemberService,
    ) -> Result<CreateAvailabilityResult> {
        let member_id = match command.member_id {
            Some(member_id) => member_id,
            None => {
                let selected = member_service.get_selected_member()?;
                match selected.selected_member.member {
                    Some(member) => member.id,
                    None => {
                        return Err(anyhow::anyhow!(
                            "No member is selected; select a family member first"
                        ))
                    }
                }
            }
        };

        info!("Creating availability: member={}, date={}", member_id, command.date);

        let availability = DomainAvailability {
            id: DomainAvailability::generate_id(),
            member_id,
            date: command.date,
            all_day: command.all_day,
            time_slots: Self::normalize_slots(command.time_slots),
            note: Self::normalize_note(command.note),
        };

        self.availability_repository.store_availability(&availability)?;

        info!("Created availability with ID: {}", availability.id);

        Ok(CreateAvailabilityResult { availability })
    }

    /// List all availability entries in the order they were added
    pub fn list_availabilities(&self) -> Result<ListAvailabilitiesResult> {
        let availabilities = self.availability_repository.list_availabilities()?;

        debug!("Found {} availability entries", availabilities.len());

        Ok(ListAvailabilitiesResult { availabilities })
    }

    /// Remove a single availability entry.
    /// An unknown ID is a no-op, reported through `removed` rather than an error.
    pub fn delete_availability(
        &self,
        command: DeleteAvailabilityCommand,
    ) -> Result<DeleteAvailabilityResult> {
        info!("Deleting availability: {}", command.availability_id);

        let removed = self
            .availability_repository
            .delete_availability(&command.availability_id)?;

        if !removed {
            debug!(
                "Availability not found, nothing to delete: {}",
                command.availability_id
            );
        }

        Ok(DeleteAvailabilityResult { removed })
    }

    /// Edit an existing availability entry.
    /// Only the fields present in the patch change; the entry's identity and
    /// owner never do. An unknown ID is a no-op reported as None.
    pub fn update_availability(
        &self,
        command: UpdateAvailabilityCommand,
    ) -> Result<UpdateAvailabilityResult> {
        info!("Updating availability: {}", command.availability_id);

        let mut availability = match self
            .availability_repository
            .get_availability(&command.availability_id)?
        {
            Some(availability) => availability,
            None => {
                debug!(
                    "Availability not found, nothing to update: {}",
                    command.availability_id
                );
                return Ok(UpdateAvailabilityResult { availability: None });
            }
        };

        let AvailabilityPatch {
            date,
            all_day,
            time_slots,
            note,
        } = command.patch;

        if let Some(date) = date {
            availability.date = date;
        }
        if let Some(all_day) = all_day {
            availability.all_day = all_day;
        }
        if let Some(time_slots) = time_slots {
            availability.time_slots = Self::normalize_slots(Some(time_slots));
        }
        if let Some(note) = note {
            availability.note = Self::normalize_note(Some(note));
        }

        self.availability_repository.update_availability(&availability)?;

        Ok(UpdateAvailabilityResult {
            availability: Some(availability),
        })
    }

    /// Remove every entry belonging to a member; used when the member is deleted.
    /// Returns the number of entries removed.
    pub fn delete_for_member(&self, member_id: &str) -> Result<usize> {
        let removed = self.availability_repository.delete_for_member(member_id)?;

        if removed > 0 {
            info!("Removed {} availability entries for member {}", removed, member_id);
        }

        Ok(removed)
    }

    /// Notes are stored trimmed; an empty or whitespace-only note becomes None
    fn normalize_note(note: Option<String>) -> Option<String> {
        note.and_then(|note| {
            let trimmed = note.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// An empty slot list is meaningless, store None instead
    fn normalize_slots(slots: Option<Vec<TimeSlot>>) -> Option<Vec<TimeSlot>> {
        slots.filter(|slots| !slots.is_empty())
    }
}
