//! # Family Scheduler Core
//!
//! This crate provides direct access to the scheduler's domain services and
//! storage for a native desktop frontend. By design it:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Excludes any IO/REST layer entirely
//! - Is optimized for single-user, desktop-only operation

use anyhow::Result;
use std::sync::Arc;

// Domain modules
pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::{JsonConnection, KeyValueStore, MemoryStore};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub member_service: domain::member_service::MemberService,
    pub availability_service: domain::AvailabilityService,
    pub calendar_service: domain::CalendarService,
    pub export_service: domain::ExportService,
    store: Arc<dyn KeyValueStore>,
}

impl Backend {
    /// Create a new backend instance with all services over the given store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        // Initialize all services; the repositories load their collections here
        let member_service = domain::member_service::MemberService::new(store.clone())?;
        let availability_service = domain::AvailabilityService::new(store.clone())?;
        let calendar_service = domain::CalendarService::new();
        let export_service = domain::ExportService::new();

        Ok(Backend {
            member_service,
            availability_service,
            calendar_service,
            export_service,
            store,
        })
    }

    /// Create a backend persisting to the default on-disk location
    pub fn with_default_storage() -> Result<Self> {
        let connection = JsonConnection::new_default()?;
        Self::new(Arc::new(connection))
    }

    /// The store this backend persists through. The export flow reads the
    /// raw collection strings from it.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
