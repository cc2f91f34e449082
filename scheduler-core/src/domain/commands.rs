//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. Frontends are responsible for mapping their
//! form state to these internal types.

pub mod members {
    use crate::domain::models::member::FamilyMember;

    /// Input for adding a new family member.
    #[derive(Debug, Clone)]
    pub struct CreateMemberCommand {
        pub name: String,
        pub color: String,
        pub avatar: Option<String>,
    }

    /// Result of adding a member.
    #[derive(Debug, Clone)]
    pub struct CreateMemberResult {
        pub member: FamilyMember,
    }

    /// Command for removing a member and everything attached to them.
    #[derive(Debug, Clone)]
    pub struct DeleteMemberCommand {
        pub member_id: String,
    }

    /// Result of removing a member. `removed` is false when the id was
    /// unknown and the operation did nothing.
    #[derive(Debug, Clone)]
    pub struct DeleteMemberResult {
        pub removed: bool,
        pub removed_availabilities: usize,
    }

    /// Command for fetching a single member.
    #[derive(Debug, Clone)]
    pub struct GetMemberCommand {
        pub member_id: String,
    }

    /// Result of fetching a single member.
    #[derive(Debug, Clone)]
    pub struct GetMemberResult {
        pub member: Option<FamilyMember>,
    }

    /// Command for changing the selected member. None clears the selection.
    #[derive(Debug, Clone)]
    pub struct SelectMemberCommand {
        pub member_id: Option<String>,
    }

    /// Result of changing the selection.
    #[derive(Debug, Clone)]
    pub struct SelectMemberResult {
        pub member: Option<FamilyMember>,
    }

    /// Result of asking who is currently selected.
    #[derive(Debug, Clone)]
    pub struct GetSelectedMemberResult {
        pub selected_member: crate::domain::models::member::SelectedMember,
    }

    /// Result of listing all members.
    #[derive(Debug, Clone)]
    pub struct ListMembersResult {
        pub members: Vec<FamilyMember>,
    }
}

pub mod availabilities {
    use crate::domain::models::availability::{Availability, TimeSlot};
    use chrono::NaiveDate;

    /// Input for recording that a member is free on a day.
    #[derive(Debug, Clone)]
    pub struct CreateAvailabilityCommand {
        /// When None the currently selected member is used.
        pub member_id: Option<String>,
        pub date: NaiveDate,
        pub all_day: bool,
        pub time_slots: Option<Vec<TimeSlot>>,
        pub note: Option<String>,
    }

    /// Result of recording an availability entry.
    #[derive(Debug, Clone)]
    pub struct CreateAvailabilityResult {
        pub availability: Availability,
    }

    /// Command for removing a single availability entry.
    #[derive(Debug, Clone)]
    pub struct DeleteAvailabilityCommand {
        pub availability_id: String,
    }

    /// Result of removing an entry. `removed` is false when the id was
    /// unknown and the operation did nothing.
    #[derive(Debug, Clone)]
    pub struct DeleteAvailabilityResult {
        pub removed: bool,
    }

    /// The fields of an availability entry that can be edited after creation.
    /// Absent fields keep their current value; `id` and `member_id` can never
    /// change through an update.
    #[derive(Debug, Clone, Default)]
    pub struct AvailabilityPatch {
        pub date: Option<NaiveDate>,
        pub all_day: Option<bool>,
        pub time_slots: Option<Vec<TimeSlot>>,
        pub note: Option<String>,
    }

    /// Command for editing an existing availability entry.
    #[derive(Debug, Clone)]
    pub struct UpdateAvailabilityCommand {
        pub availability_id: String,
        pub patch: AvailabilityPatch,
    }

    /// Result of editing an entry. `availability` is None when the id was
    /// unknown and nothing was changed.
    #[derive(Debug, Clone)]
    pub struct UpdateAvailabilityResult {
        pub availability: Option<Availability>,
    }

    /// Result of listing all availability entries.
    #[derive(Debug, Clone)]
    pub struct ListAvailabilitiesResult {
        pub availabilities: Vec<Availability>,
    }
}
