//! Achievements module - domain models, reconciliation, services, and traits.

mod achievements_model;
mod achievements_service;
mod achievements_traits;
mod reconciler;

pub use achievements_model::Achievement;
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
pub use reconciler::merge_schema_and_player_achievements;
