use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette cycled through when adding members, in presentation order.
pub const MEMBER_COLORS: [&str; 10] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#06b6d4", "#6366f1", "#f43f5e",
    "#84cc16", "#a855f7",
];

/// Color used when an availability entry points at a member that no longer exists.
pub const DEFAULT_MEMBER_COLOR: &str = "#3b82f6";

/// Pick the next palette color given how many members already exist.
pub fn suggested_color(existing_members: usize) -> &'static str {
    MEMBER_COLORS[existing_members % MEMBER_COLORS.len()]
}

/// Member ID in format: "member::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    /// Hex color used wherever the member is rendered (e.g. "#3b82f6")
    pub color: String,
    /// Optional emoji or initials shown next to the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A time range within a day, "HH:MM" strings (e.g. "09:00" to "17:30")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// Availability ID in format: "availability::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: String,
    /// ID of the member this entry belongs to
    pub member_id: String,
    /// Day the member is free, as midnight UTC (RFC 3339)
    pub date: String,
    /// Specific free slots; only meaningful when `all_day` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slots: Option<Vec<TimeSlot>>,
    pub all_day: bool,
    /// Free-form note; never stored empty or whitespace-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month (if needed for grid alignment)
    PaddingAfter,
}

/// Represents a calendar month with the availability entries that fall inside it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

/// Represents a single day cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub availabilities: Vec<Availability>,
    pub day_type: CalendarDayType,
}

/// Represents the current focus date for calendar navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

/// One day's entries for the list views; lists come back in ascending date order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaDay {
    /// Day key in "YYYY-MM-DD" form
    pub date: String,
    pub availabilities: Vec<Availability>,
}

/// Response containing a ready-to-save schedule snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportDataResponse {
    pub json_content: String,
    pub filename: String,
    pub member_count: usize,
    pub availability_count: usize,
}

/// Request for writing the schedule snapshot to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportToPathRequest {
    /// Target directory; when None the user's Documents folder is used
    pub custom_path: Option<String>,
}

/// Response after writing the schedule snapshot to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub member_count: usize,
    pub availability_count: usize,
}

impl FamilyMember {
    /// Generate a member ID from a fresh UUID
    pub fn generate_id() -> String {
        format!("member::{}", uuid::Uuid::new_v4())
    }

    /// Parse a member ID to extract the UUID component
    pub fn parse_id(id: &str) -> Result<uuid::Uuid, IdError> {
        let uuid = id.strip_prefix("member::").ok_or(IdError::InvalidFormat)?;
        uuid::Uuid::parse_str(uuid).map_err(|_| IdError::InvalidUuid)
    }
}

impl Availability {
    /// Generate an availability ID from a fresh UUID
    pub fn generate_id() -> String {
        format!("availability::{}", uuid::Uuid::new_v4())
    }

    /// Parse an availability ID to extract the UUID component
    pub fn parse_id(id: &str) -> Result<uuid::Uuid, IdError> {
        let uuid = id.strip_prefix("availability::").ok_or(IdError::InvalidFormat)?;
        uuid::Uuid::parse_str(uuid).map_err(|_| IdError::InvalidUuid)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdError {
    InvalidFormat,
    InvalidUuid,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::InvalidFormat => write!(f, "Invalid ID format"),
            IdError::InvalidUuid => write!(f, "Invalid UUID in ID"),
        }
    }
}

impl std::error::Error for IdError {}
