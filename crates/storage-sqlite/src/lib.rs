//! SQLite storage implementation for Nesta.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `nesta-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for games, achievements, pick history and config
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits.
//!
//! ```text
//!   steam (HTTP)        core (domain)
//!                            │
//!                            ▼
//!                storage-sqlite (this crate)
//!                            │
//!                            ▼
//!                        SQLite DB
//! ```
//!
//! All writes go through a single writer task (see [`db::write_actor`]) so
//! each repository call commits atomically.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod achievements;
pub mod config;
pub mod games;
pub mod history;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

pub use achievements::AchievementRepository;
pub use config::ConfigRepository;
pub use errors::StorageError;
pub use games::GameRepository;
pub use history::HistoryRepository;

// Re-export from nesta-core for convenience
pub use nesta_core::errors::{DatabaseError, Error, Result};
