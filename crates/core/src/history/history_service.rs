use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::history_model::{NewPickHistoryEntry, PickHistoryEntry, PickHistoryView};
use super::history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
use crate::achievements::Achievement;
use crate::errors::{Result, ValidationError};

/// Number of picks listed when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

pub struct HistoryService {
    repository: Arc<dyn HistoryRepositoryTrait>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HistoryServiceTrait for HistoryService {
    async fn record_pick(&self, achievement: &Achievement) -> Result<PickHistoryEntry> {
        let entry = self
            .repository
            .append_history(NewPickHistoryEntry {
                game_app_id: achievement.game_app_id,
                achievement_api_name: achievement.api_name.clone(),
                picked_at: Utc::now(),
            })
            .await?;
        debug!(
            "Recorded pick {} for {}/{}",
            entry.id, entry.game_app_id, entry.achievement_api_name
        );
        Ok(entry)
    }

    fn recent_picks(&self, limit: Option<i64>) -> Result<Vec<PickHistoryView>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if limit <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "history limit must be positive, got {}",
                limit
            ))
            .into());
        }
        self.repository.recent_history(limit)
    }
}
