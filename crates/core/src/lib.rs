//! Brickdesk Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Brickdesk.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod catalog;
pub mod conversations;
pub mod errors;
pub mod leads;
pub mod profiles;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
