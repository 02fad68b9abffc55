use crate::errors::Result;
use crate::picker::picker_model::{BrowseOptions, BrowseOutcome, PickOptions, PickOutcome};
use async_trait::async_trait;

/// Trait for picker operations
#[async_trait]
pub trait PickerServiceTrait: Send + Sync {
    /// Choose one outstanding achievement and record the pick.
    ///
    /// Fails with `Error::ProfilePrivate` when Steam hides the player's
    /// game details.
    async fn pick_achievement(&self, options: PickOptions) -> Result<PickOutcome>;

    /// All achievements of the first matching game. Records nothing.
    async fn list_achievements(&self, options: BrowseOptions) -> Result<BrowseOutcome>;
}
