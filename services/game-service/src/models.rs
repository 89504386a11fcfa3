use common::Game;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbGame {
     pub id: Uuid,
     pub title: String,
     pub genre: Option<String>,
     pub release_date: Option<String>,
}

impl From<DbGame> for Game {
     fn from(row: DbGame) -> Self {
          Game {
               id: row.id,
               title: row.title,
               genre: row.genre,
               release_date: row.release_date,
          }
     }
}
