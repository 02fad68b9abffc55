use crate::achievements::Achievement;
use crate::errors::Result;
use crate::history::history_model::{NewPickHistoryEntry, PickHistoryEntry, PickHistoryView};
use async_trait::async_trait;

/// Trait for pick history repository operations
#[async_trait]
pub trait HistoryRepositoryTrait: Send + Sync {
    async fn append_history(&self, entry: NewPickHistoryEntry) -> Result<PickHistoryEntry>;
    /// Newest first, joined with achievement display names.
    fn recent_history(&self, limit: i64) -> Result<Vec<PickHistoryView>>;
}

/// Trait for pick history service operations
#[async_trait]
pub trait HistoryServiceTrait: Send + Sync {
    /// Appends one history row for `achievement`, stamped now.
    async fn record_pick(&self, achievement: &Achievement) -> Result<PickHistoryEntry>;
    /// Recent picks, `DEFAULT_HISTORY_LIMIT` when `limit` is `None`.
    fn recent_picks(&self, limit: Option<i64>) -> Result<Vec<PickHistoryView>>;
}
