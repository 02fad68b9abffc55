//! Nesta Core - Domain entities, services, and traits.
//!
//! This crate contains the picker's business logic. It is
//! database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod achievements;
pub mod config;
pub mod errors;
pub mod games;
pub mod history;
pub mod picker;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
