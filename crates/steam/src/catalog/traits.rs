use async_trait::async_trait;

use crate::errors::SteamError;
use crate::models::{CommunityAchievement, OwnedGame, SchemaAchievement, SteamIdentity};

/// Key-authenticated catalog lookups against the Steam Web API.
#[async_trait]
pub trait SteamCatalog: Send + Sync {
    /// Resolve a vanity alias to a SteamID64.
    ///
    /// `Ok(None)` when Steam answers but does not report a match.
    async fn resolve_vanity(
        &self,
        api_key: &str,
        vanity: &str,
    ) -> Result<Option<String>, SteamError>;

    /// The player's library, in the order Steam returns it.
    async fn owned_games(
        &self,
        api_key: &str,
        identity: &SteamIdentity,
    ) -> Result<Vec<OwnedGame>, SteamError>;

    /// Achievement definitions for a game.
    async fn game_schema(
        &self,
        api_key: &str,
        app_id: u32,
    ) -> Result<Vec<SchemaAchievement>, SteamError>;
}

/// Keyless lookups against public community pages.
///
/// Never fails: anything unreadable is an empty list.
#[async_trait]
pub trait GuestCatalog: Send + Sync {
    async fn owned_games(&self, identity: &SteamIdentity) -> Vec<OwnedGame>;

    async fn achievements(
        &self,
        identity: &SteamIdentity,
        app_id: u32,
    ) -> Vec<CommunityAchievement>;
}
