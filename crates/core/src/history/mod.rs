//! Pick history module - domain models, services, and traits.

mod history_model;
mod history_service;
mod history_traits;

pub use history_model::{NewPickHistoryEntry, PickHistoryEntry, PickHistoryView};
pub use history_service::{HistoryService, DEFAULT_HISTORY_LIMIT};
pub use history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
