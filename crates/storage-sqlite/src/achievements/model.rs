//! Database models for achievements.

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::games::GameDB;

/// Database model for achievements, keyed by `(game_app_id, api_name)`.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GameDB, foreign_key = game_app_id))]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(primary_key(game_app_id, api_name))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AchievementDB {
    pub game_app_id: i64,
    pub api_name: String,
    pub display_name: String,
    pub description: String,
    pub achieved: bool,
    pub unlocked_at: Option<NaiveDateTime>,
}

impl From<AchievementDB> for nesta_core::achievements::Achievement {
    fn from(db: AchievementDB) -> Self {
        Self {
            api_name: db.api_name,
            game_app_id: db.game_app_id as u32,
            display_name: db.display_name,
            description: db.description,
            achieved: db.achieved,
            unlocked_at: db
                .unlocked_at
                .map(|t| DateTime::<Utc>::from_naive_utc_and_offset(t, Utc)),
        }
    }
}

impl From<nesta_core::achievements::Achievement> for AchievementDB {
    fn from(domain: nesta_core::achievements::Achievement) -> Self {
        Self {
            game_app_id: i64::from(domain.game_app_id),
            api_name: domain.api_name,
            display_name: domain.display_name,
            description: domain.description,
            achieved: domain.achieved,
            unlocked_at: domain.unlocked_at.map(|t| t.naive_utc()),
        }
    }
}
