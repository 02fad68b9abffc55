//! SQLite storage implementation for achievements.

mod model;
mod repository;

pub use model::AchievementDB;
pub use repository::AchievementRepository;
