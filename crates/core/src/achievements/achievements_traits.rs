use crate::achievements::achievements_model::Achievement;
use crate::errors::Result;
use crate::games::SteamAccess;
use async_trait::async_trait;

/// Trait for achievement repository operations
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    /// Read side of the stored achievements for one game.
    ///
    /// History display joins these rows for names and unlock state; this is
    /// the per-game view of what `upsert_achievements` wrote. Unknown games
    /// yield an empty list.
    fn get_achievements_for_game(&self, game_app_id: u32) -> Result<Vec<Achievement>>;
    /// Insert or replace by `(game_app_id, api_name)`, in one transaction.
    async fn upsert_achievements(&self, achievements: Vec<Achievement>) -> Result<usize>;
}

/// Trait for achievement service operations
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    /// Reconciled achievements of one game, stored before they are returned.
    ///
    /// Fails only when the player's profile is private.
    async fn load_game_achievements(
        &self,
        access: &SteamAccess,
        game_app_id: u32,
    ) -> Result<Vec<Achievement>>;
}
