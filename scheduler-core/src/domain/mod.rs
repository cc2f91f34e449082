//! # Domain Module
//!
//! Contains all business logic for the family scheduler.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how family members and their availability are modeled and
//! managed. It operates independently of any specific UI framework or storage
//! mechanism.
//!
//! ## Module Organization
//!
//! - **member_service**: Family member CRUD operations and selection state
//! - **availability_service**: Availability entry CRUD operations and validation
//! - **agenda**: Date grouping, list views, and common-availability discovery
//! - **calendar**: Calendar month-grid generation and focus-date navigation
//! - **export_service**: Schedule snapshot generation and file export
//! - **commands**: Command and result structs the services speak
//! - **mappers**: Conversions between wire DTOs and domain models
//! - **models**: The domain entities themselves
//!
//! ## Key Responsibilities
//!
//! - **Member Management**: Creating, selecting, and removing family members
//! - **Availability Management**: Recording who is free on which day
//! - **Common-Date Discovery**: Surfacing days where several members overlap
//! - **Business Rule Enforcement**: Validation before any state mutates
//! - **Calendar Operations**: Month grids and date calculations for the UI
//! - **Snapshot Export**: Packaging the persisted state for saving elsewhere
//!
//! ## Business Rules
//!
//! - Member names must be non-empty after trimming
//! - Removing a member removes every availability entry attached to them
//! - A day is "common" only when more than one distinct member is free
//! - Notes collapse to absent when they trim to nothing
//! - The selected member is session state, never persisted
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each service has a focused purpose
//! - **Testability**: Pure functions and clear interfaces for easy testing
//! - **Storage Agnostic**: Works with any key-value store implementation
//! - **UI Agnostic**: Business logic separate from presentation concerns

pub mod agenda;
pub mod availability_service;
pub mod calendar;
pub mod commands;
pub mod export_service;
pub mod mappers;
pub mod member_service;
pub mod models;

pub use agenda::*;
pub use availability_service::*;
pub use calendar::*;
pub use commands::*;
pub use export_service::*;
pub use mappers::*;
pub use member_service::*;
