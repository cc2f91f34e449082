use anyhow::Result;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

use crate::domain::availability_service::AvailabilityService;
use crate::domain::commands::members::{
    CreateMemberCommand, CreateMemberResult, DeleteMemberCommand, DeleteMemberResult,
    GetMemberCommand, GetMemberResult, GetSelectedMemberResult, ListMembersResult,
    SelectMemberCommand, SelectMemberResult,
};
use crate::domain::models::member::{FamilyMember as DomainMember, SelectedMember};
use crate::storage::json::MemberRepository;
use crate::storage::traits::KeyValueStore;

/// Service for managing the family roster and the current selection.
///
/// The selection is session state: it lives only in memory and starts out
/// empty on every launch.
#[derive(Clone)]
pub struct MemberService {
    member_repository: MemberRepository,
    selected_member_id: Arc<Mutex<Option<String>>>,
}

impl MemberService {
    /// Create a new MemberService over a storage adapter
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let member_repository = MemberRepository::new(store)?;
        Ok(Self {
            member_repository,
            selected_member_id: Arc::new(Mutex::new(None)),
        })
    }

    /// Add a new member to the roster
    pub fn create_member(&self, command: CreateMemberCommand) -> Result<CreateMemberResult> {
        info!("Creating member: name={}", command.name);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Member name cannot be empty"));
        }

        let member = DomainMember {
            id: DomainMember::generate_id(),
            name: name.to_string(),
            color: command.color,
            avatar: command.avatar,
        };

        self.member_repository.store_member(&member)?;

        info!("Created member: {} with ID: {}", member.name, member.id);

        Ok(CreateMemberResult { member })
    }

    /// Get a member by ID
    pub fn get_member(&self, command: GetMemberCommand) -> Result<GetMemberResult> {
        debug!("Getting member: {}", command.member_id);

        let member = self.member_repository.get_member(&command.member_id)?;

        if member.is_none() {
            warn!("Member not found: {}", command.member_id);
        }

        Ok(GetMemberResult { member })
    }

    /// List all members in the order they were added
    pub fn list_members(&self) -> Result<ListMembersResult> {
        let members = self.member_repository.list_members()?;

        debug!("Found {} members", members.len());

        Ok(ListMembersResult { members })
    }

    /// Remove a member together with all of their availability entries.
    /// An unknown ID is a no-op, reported through `removed` rather than an error.
    pub fn delete_member(
        &self,
        command: DeleteMemberCommand,
        availability_service: &AvailabilityService,
    ) -> Result<DeleteMemberResult> {
        info!("Deleting member: {}", command.member_id);

        let member = match self.member_repository.get_member(&command.member_id)? {
            Some(member) => member,
            None => {
                debug!("Member not found, nothing to delete: {}", command.member_id);
                return Ok(DeleteMemberResult {
                    removed: false,
                    removed_availabilities: 0,
                });
            }
        };

        // Cascade first so a failure cannot orphan availability entries
        let removed_availabilities = availability_service.delete_for_member(&member.id)?;
        self.member_repository.delete_member(&member.id)?;

        {
            let mut selected = self.selected_member_id.lock().unwrap();
            if selected.as_deref() == Some(member.id.as_str()) {
                info!("Cleared selection, selected member was deleted: {}", member.id);
                *selected = None;
            }
        }

        info!(
            "Deleted member: {} with ID: {} ({} availability entries removed)",
            member.name, member.id, removed_availabilities
        );

        Ok(DeleteMemberResult {
            removed: true,
            removed_availabilities,
        })
    }

    /// Change the selected member. Passing None clears the selection.
    pub fn select_member(&self, command: SelectMemberCommand) -> Result<SelectMemberResult> {
        match command.member_id {
            Some(member_id) => {
                info!("Selecting member: {}", member_id);

                // Validate that the member exists
                let member = self
                    .member_repository
                    .get_member(&member_id)?
                    .ok_or_else(|| anyhow::anyhow!("Member not found: {}", member_id))?;

                *self.selected_member_id.lock().unwrap() = Some(member.id.clone());

                info!("Selected member: {} ({})", member.name, member.id);
                Ok(SelectMemberResult {
                    member: Some(member),
                })
            }
            None => {
                info!("Clearing member selection");
                *self.selected_member_id.lock().unwrap() = None;
                Ok(SelectMemberResult { member: None })
            }
        }
    }

    /// Get the currently selected member
    pub fn get_selected_member(&self) -> Result<GetSelectedMemberResult> {
        debug!("Getting selected member");

        let selected_id = self.selected_member_id.lock().unwrap().clone();

        let member = if let Some(member_id) = selected_id {
            match self.member_repository.get_member(&member_id)? {
                Some(member) => Some(member),
                None => {
                    warn!("Selected member no longer exists: {}", member_id);
                    None
                }
            }
        } else {
            None
        };

        Ok(GetSelectedMemberResult {
            selected_member: SelectedMember { member },
        })
    }
}
