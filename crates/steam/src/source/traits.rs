//! Player-state source trait definitions.

use async_trait::async_trait;

use crate::errors::SteamError;
use crate::models::{PlayerAchievementState, SteamIdentity};

/// Everything a source needs to look up one player's progress in one game.
#[derive(Clone, Debug)]
pub struct SourceRequest {
    pub api_key: Option<String>,
    pub identity: SteamIdentity,
    pub app_id: u32,
}

impl SourceRequest {
    pub fn new(api_key: Option<String>, identity: SteamIdentity, app_id: u32) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            identity,
            app_id,
        }
    }

    /// The API key, or [`SteamError::MissingApiKey`] naming `provider`.
    pub fn require_api_key(&self, provider: &str) -> Result<&str, SteamError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SteamError::MissingApiKey {
                provider: provider.to_string(),
            })
    }
}

/// Trait for per-player achievement state sources.
///
/// Implementations return an empty list when the player simply has no
/// achievements for the game. Errors are reserved for failures; the chain
/// decides via [`SteamError::fallback_class`] whether to continue.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use nesta_steam::source::{PlayerStateSource, SourceRequest};
///
/// struct FixtureSource;
///
/// #[async_trait]
/// impl PlayerStateSource for FixtureSource {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch(&self, request: &SourceRequest) -> Result<Vec<PlayerAchievementState>, SteamError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait PlayerStateSource: Send + Sync {
    /// Unique identifier for this source, used in logs and diagnostics.
    fn id(&self) -> &'static str;

    /// Whether the source needs a Web API key.
    ///
    /// The chain skips key-requiring sources when no key is configured.
    fn requires_api_key(&self) -> bool {
        true
    }

    /// Fetch the player's state for every achievement in the game.
    async fn fetch(
        &self,
        request: &SourceRequest,
    ) -> Result<Vec<PlayerAchievementState>, SteamError>;
}
