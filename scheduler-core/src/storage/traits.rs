//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! key-value backends to be used interchangeably by the repositories.

use anyhow::Result;

/// Key under which the member collection is persisted
pub const MEMBERS_KEY: &str = "familyMembers";

/// Key under which the availability collection is persisted
pub const AVAILABILITIES_KEY: &str = "availabilities";

/// Trait defining the interface for raw schedule storage
///
/// Implementations store opaque text under well-known keys. Repositories own
/// all serialization; an adapter never inspects the values it holds, so the
/// backend can be swapped (files on disk, in-memory) without touching the
/// domain layer.
///
/// Note: All operations are synchronous for desktop-only operation
pub trait KeyValueStore: Send + Sync {
    /// Read the text stored under `key`
    /// Returns None when the key has never been written, which is distinct
    /// from an empty string having been stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
