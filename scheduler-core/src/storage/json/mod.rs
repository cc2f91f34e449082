//! # JSON Storage Module
//!
//! File-backed storage for the family scheduler. Each well-known key maps to
//! one JSON document on disk, and every mutation rewrites that document in
//! full. The values are exactly the strings the repositories hand over.
//!
//! ## File Format
//!
//! `familyMembers.json` holds a JSON array of member objects:
//! ```json
//! [{"id": "member::...", "name": "Alice", "color": "#3b82f6"}]
//! ```
//!
//! `availabilities.json` holds a JSON array of availability objects:
//! ```json
//! [{"id": "availability::...", "memberId": "member::...",
//!   "date": "2024-06-01T00:00:00+00:00", "allDay": true}]
//! ```

pub mod availability_repository;
pub mod connection;
pub mod member_repository;

pub use availability_repository::AvailabilityRepository;
pub use connection::JsonConnection;
pub use member_repository::MemberRepository;
