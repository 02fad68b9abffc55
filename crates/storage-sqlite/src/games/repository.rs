use nesta_core::games::{Game, GameRepositoryTrait};
use nesta_core::Result;

use super::model::GameDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::games;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GameRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GameRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GameRepository { pool, writer }
    }
}

#[async_trait]
impl GameRepositoryTrait for GameRepository {
    fn list_games(&self) -> Result<Vec<Game>> {
        let mut conn = get_connection(&self.pool)?;
        let games_db = games::table
            .order(games::name.asc())
            .select(GameDB::as_select())
            .load::<GameDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(games_db.into_iter().map(Game::from).collect())
    }

    async fn upsert_games(&self, games_to_store: Vec<Game>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut affected_rows = 0;
                for game in games_to_store {
                    let game_db: GameDB = game.into();
                    affected_rows += diesel::insert_into(games::table)
                        .values(&game_db)
                        .on_conflict(games::app_id)
                        .do_update()
                        .set(games::name.eq(&game_db.name))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}
