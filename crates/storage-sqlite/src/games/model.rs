//! Database models for games.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for games
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::games)]
#[diesel(primary_key(app_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GameDB {
    pub app_id: i64,
    pub name: String,
}

impl From<GameDB> for nesta_core::games::Game {
    fn from(db: GameDB) -> Self {
        Self {
            app_id: db.app_id as u32,
            name: db.name,
        }
    }
}

impl From<nesta_core::games::Game> for GameDB {
    fn from(domain: nesta_core::games::Game) -> Self {
        Self {
            app_id: i64::from(domain.app_id),
            name: domain.name,
        }
    }
}
