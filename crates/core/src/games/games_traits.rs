use crate::config::Config;
use crate::errors::Result;
use crate::games::games_model::{Game, SteamAccess};
use async_trait::async_trait;

/// Trait for game repository operations
#[async_trait]
pub trait GameRepositoryTrait: Send + Sync {
    /// Read side of the stored library, ordered by name.
    ///
    /// History display reads the same rows through its own join; this is
    /// the per-table view of what `upsert_games` wrote.
    fn list_games(&self) -> Result<Vec<Game>>;
    /// Insert or replace by app id, in one transaction.
    async fn upsert_games(&self, games: Vec<Game>) -> Result<usize>;
}

/// Trait for game service operations
#[async_trait]
pub trait GameServiceTrait: Send + Sync {
    /// Identity and key for this run, with vanity aliases resolved when possible.
    async fn resolve_access(&self, config: &Config) -> Result<SteamAccess>;
    /// The player's library, stored before it is returned.
    async fn list_owned_games(&self, access: &SteamAccess) -> Result<Vec<Game>>;
}
