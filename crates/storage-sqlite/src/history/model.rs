//! Database models for pick history.

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for a stored pick
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::pick_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PickHistoryDB {
    pub id: i64,
    pub game_app_id: i64,
    pub achievement_api_name: String,
    pub picked_at: NaiveDateTime,
}

/// Database model for recording a pick; the id is assigned by SQLite.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::pick_history)]
#[serde(rename_all = "camelCase")]
pub struct NewPickHistoryDB {
    pub game_app_id: i64,
    pub achievement_api_name: String,
    pub picked_at: NaiveDateTime,
}

impl From<PickHistoryDB> for nesta_core::history::PickHistoryEntry {
    fn from(db: PickHistoryDB) -> Self {
        Self {
            id: db.id,
            game_app_id: db.game_app_id as u32,
            achievement_api_name: db.achievement_api_name,
            picked_at: DateTime::<Utc>::from_naive_utc_and_offset(db.picked_at, Utc),
        }
    }
}

impl From<nesta_core::history::NewPickHistoryEntry> for NewPickHistoryDB {
    fn from(domain: nesta_core::history::NewPickHistoryEntry) -> Self {
        Self {
            game_app_id: i64::from(domain.game_app_id),
            achievement_api_name: domain.achievement_api_name,
            picked_at: domain.picked_at.naive_utc(),
        }
    }
}
