use chrono::{DateTime, NaiveDateTime, Utc};
use nesta_core::history::{
    HistoryRepositoryTrait, NewPickHistoryEntry, PickHistoryEntry, PickHistoryView,
};
use nesta_core::Result;

use super::model::{NewPickHistoryDB, PickHistoryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{achievements, pick_history};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

type HistoryRow = (i64, i64, String, Option<String>, NaiveDateTime);

pub struct HistoryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl HistoryRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        HistoryRepository { pool, writer }
    }
}

#[async_trait]
impl HistoryRepositoryTrait for HistoryRepository {
    async fn append_history(&self, entry: NewPickHistoryEntry) -> Result<PickHistoryEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PickHistoryEntry> {
                let new_entry_db: NewPickHistoryDB = entry.into();
                let result_db = diesel::insert_into(pick_history::table)
                    .values(&new_entry_db)
                    .returning(PickHistoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PickHistoryEntry::from(result_db))
            })
            .await
    }

    fn recent_history(&self, limit: i64) -> Result<Vec<PickHistoryView>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = pick_history::table
            .left_join(
                achievements::table.on(achievements::game_app_id
                    .eq(pick_history::game_app_id)
                    .and(achievements::api_name.eq(pick_history::achievement_api_name))),
            )
            .select((
                pick_history::id,
                pick_history::game_app_id,
                pick_history::achievement_api_name,
                achievements::display_name.nullable(),
                pick_history::picked_at,
            ))
            .order((pick_history::picked_at.desc(), pick_history::id.desc()))
            .limit(limit)
            .load::<HistoryRow>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(
                |(id, game_app_id, achievement_api_name, display_name, picked_at)| {
                    PickHistoryView {
                        id,
                        game_app_id: game_app_id as u32,
                        achievement_api_name,
                        display_name,
                        picked_at: DateTime::<Utc>::from_naive_utc_and_offset(picked_at, Utc),
                    }
                },
            )
            .collect())
    }
}
