//! SQLite storage implementation for pick history.

mod model;
mod repository;

pub use model::{NewPickHistoryDB, PickHistoryDB};
pub use repository::HistoryRepository;
