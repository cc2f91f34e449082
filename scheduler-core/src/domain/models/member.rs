use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing a family member.
/// This model contains the core business information for one person on the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub color: String,
    pub avatar: Option<String>,
}

impl FamilyMember {
    /// Generate a unique ID for a member
    pub fn generate_id() -> String {
        format!("member::{}", Uuid::new_v4())
    }
}

/// Represents the selected member, which could be None when nobody is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedMember {
    pub member: Option<FamilyMember>,
}
