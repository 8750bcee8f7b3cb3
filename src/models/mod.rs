//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the JSON request/response types for each endpoint.

/// Catalog item model
pub mod item;
/// Purchase request/response types
pub mod purchase;
/// User account and card model
pub mod user;
