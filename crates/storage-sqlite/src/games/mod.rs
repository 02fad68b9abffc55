//! SQLite storage implementation for the game library.

mod model;
mod repository;

pub use model::GameDB;
pub use repository::GameRepository;
