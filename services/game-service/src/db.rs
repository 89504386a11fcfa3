use async_trait::async_trait;
use common::{Game, GameChanges, NewGame};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::models::DbGame;
use crate::store::{GameStore, StoreError};

#[derive(Clone)]
pub struct PgGameStore {
     pool: PgPool,
}

impl PgGameStore {
     pub fn new(pool: PgPool) -> Self {
          Self { pool }
     }

     /// Opens a pool and brings the `games` table up to date.
     pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
          let pool = PgPoolOptions::new()
               .max_connections(max_connections)
               .connect(database_url)
               .await?;

          let store = Self::new(pool);
          store.migrate().await?;
          Ok(store)
     }

     pub async fn migrate(&self) -> Result<(), StoreError> {
          sqlx::migrate!("./migrations").run(&self.pool).await?;
          Ok(())
     }
}

#[async_trait]
impl GameStore for PgGameStore {
     async fn create(&self, game: NewGame) -> Result<Game, StoreError> {
          let record = sqlx::query_as::<_, DbGame>(
               r#"
               INSERT INTO games (id, title, genre, release_date)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, genre, release_date
               "#,
          )
          .bind(Uuid::new_v4())
          .bind(&game.title)
          .bind(&game.genre)
          .bind(&game.release_date)
          .fetch_one(&self.pool)
          .await?;

          Ok(record.into())
     }

     async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
          let records = sqlx::query_as::<_, DbGame>(
               r#"
               SELECT id, title, genre, release_date
               FROM games
               ORDER BY seq
               "#,
          )
          .fetch_all(&self.pool)
          .await?;

          Ok(records.into_iter().map(Into::into).collect())
     }

     async fn find_by_id_and_update(
          &self,
          id: Uuid,
          changes: GameChanges,
     ) -> Result<Option<Game>, StoreError> {
          let record = sqlx::query_as::<_, DbGame>(
               r#"
               UPDATE games
               SET
                    title = $2,
                    genre = COALESCE($3, genre),
                    release_date = COALESCE($4, release_date)
               WHERE id = $1
               RETURNING id, title, genre, release_date
               "#,
          )
          .bind(id)
          .bind(&changes.title)
          .bind(&changes.genre)
          .bind(&changes.release_date)
          .fetch_optional(&self.pool)
          .await?;

          Ok(record.map(Into::into))
     }

     async fn find_by_id_and_remove(&self, id: Uuid) -> Result<Option<Game>, StoreError> {
          let record = sqlx::query_as::<_, DbGame>(
               r#"
               DELETE FROM games
               WHERE id = $1
               RETURNING id, title, genre, release_date
               "#,
          )
          .bind(id)
          .fetch_optional(&self.pool)
          .await?;

          Ok(record.map(Into::into))
     }
}
