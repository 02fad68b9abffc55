use nesta_core::achievements::{Achievement, AchievementRepositoryTrait};
use nesta_core::Result;

use super::model::AchievementDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::achievements;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct AchievementRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn get_achievements_for_game(&self, game_app_id: u32) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let achievements_db = achievements::table
            .filter(achievements::game_app_id.eq(i64::from(game_app_id)))
            .order(achievements::api_name.asc())
            .select(AchievementDB::as_select())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(achievements_db.into_iter().map(Achievement::from).collect())
    }

    async fn upsert_achievements(&self, to_store: Vec<Achievement>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut affected_rows = 0;
                for achievement in to_store {
                    let achievement_db: AchievementDB = achievement.into();
                    affected_rows += diesel::insert_into(achievements::table)
                        .values(&achievement_db)
                        .on_conflict((achievements::game_app_id, achievements::api_name))
                        .do_update()
                        .set(&achievement_db)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}
