//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user record repository using Diesel
//! - **in_memory**: process-local repository for development and tests
//! - **geocoding**: reqwest client for the Mapbox forward geocoding API
//!
//! Adapters translate between domain types and infrastructure
//! representations and contain no business logic.

pub mod geocoding;
pub mod in_memory;
pub mod persistence;
