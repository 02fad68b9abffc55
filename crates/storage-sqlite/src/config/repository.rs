use nesta_core::config::{Config, ConfigRepositoryTrait};
use nesta_core::Result;

use super::model::{UserConfigDB, CONFIG_ROW_ID};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_config;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ConfigRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ConfigRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ConfigRepository { pool, writer }
    }
}

#[async_trait]
impl ConfigRepositoryTrait for ConfigRepository {
    fn load_config(&self) -> Result<Option<Config>> {
        let mut conn = get_connection(&self.pool)?;
        let row = user_config::table
            .find(CONFIG_ROW_ID)
            .select(UserConfigDB::as_select())
            .first::<UserConfigDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Config::from))
    }

    async fn save_config(&self, config: Config) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row: UserConfigDB = config.into();
                diesel::insert_into(user_config::table)
                    .values(&row)
                    .on_conflict(user_config::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
