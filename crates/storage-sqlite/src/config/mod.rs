//! SQLite storage implementation for the user config.

mod model;
mod repository;

pub use model::UserConfigDB;
pub use repository::ConfigRepository;
