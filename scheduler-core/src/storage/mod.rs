//! # Storage Module
//!
//! Handles all data persistence for the family scheduler.
//!
//! The domain layer never touches files directly. Repositories serialize the
//! member and availability collections and hand the resulting text to a
//! `KeyValueStore` adapter, which is the only part that knows where bytes
//! actually live. Two adapters ship with the crate:
//!
//! - **JsonConnection**: one JSON document per key in a data directory
//! - **MemoryStore**: a plain map, for tests and throwaway sessions
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Repositories depend on the adapter trait, not
//!   on a concrete backend
//! - **Durability**: Every mutation rewrites the affected document atomically

pub mod json;
pub mod memory;
pub mod traits;

// Re-export the main types that other modules need
pub use json::{AvailabilityRepository, JsonConnection, MemberRepository};
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, AVAILABILITIES_KEY, MEMBERS_KEY};
