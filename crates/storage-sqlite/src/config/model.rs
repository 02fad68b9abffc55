//! Database model for the user config.

use diesel::prelude::*;
use nesta_core::config::Config;

/// The config lives in a single row.
pub const CONFIG_ROW_ID: i32 = 1;

#[derive(Queryable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::user_config)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserConfigDB {
    pub id: i32,
    pub steam_id: String,
    pub api_key: Option<String>,
    pub open_router_api_key: Option<String>,
}

impl From<UserConfigDB> for Config {
    fn from(db: UserConfigDB) -> Self {
        Self {
            steam_id: db.steam_id,
            api_key: db.api_key,
            open_router_api_key: db.open_router_api_key,
        }
    }
}

impl From<Config> for UserConfigDB {
    fn from(config: Config) -> Self {
        Self {
            id: CONFIG_ROW_ID,
            steam_id: config.steam_id,
            api_key: config.api_key,
            open_router_api_key: config.open_router_api_key,
        }
    }
}
