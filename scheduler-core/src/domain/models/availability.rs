use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time range within a single day. Start and end are "HH:MM" strings and are
/// carried through untouched; the domain never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// Domain model representing one member's availability on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub id: String,
    pub member_id: String,
    /// The day this entry refers to. Time of day is not meaningful here.
    pub date: NaiveDate,
    pub all_day: bool,
    /// Specific free slots; only consulted when `all_day` is false
    pub time_slots: Option<Vec<TimeSlot>>,
    /// Never Some("") or whitespace-only; normalized at the service boundary
    pub note: Option<String>,
}

impl Availability {
    /// Generate a unique ID for an availability entry
    pub fn generate_id() -> String {
        format!("availability::{}", Uuid::new_v4())
    }
}
