//! Domain models for the family scheduler.
//!
//! These types carry parsed, validated data (real dates, normalized notes) as
//! opposed to the wire DTOs in the `shared` crate, which mirror the persisted
//! JSON layout exactly.

pub mod availability;
pub mod member;

pub use availability::{Availability, TimeSlot};
pub use member::{FamilyMember, SelectedMember};
