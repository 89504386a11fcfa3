//! Persistence seam for game records.
//!
//! Handlers only see [`GameStore`]. The Postgres implementation lives in
//! [`crate::db`]; [`MemoryGameStore`] keeps records in process and backs the
//! tests and the `GAMES_STORE=memory` mode.

use async_trait::async_trait;
use common::{apply_changes, create_game_from_request, Game, GameChanges, NewGame};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create(&self, game: NewGame) -> Result<Game, StoreError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<Game>, StoreError>;

    /// Returns the record as it is after the update, or `None` if no record
    /// has this id.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> Result<Option<Game>, StoreError>;

    /// Returns the removed record, or `None` if no record has this id.
    async fn find_by_id_and_remove(&self, id: Uuid) -> Result<Option<Game>, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: RwLock<Vec<Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: RwLock::new(games),
        }
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, game: NewGame) -> Result<Game, StoreError> {
        let game = create_game_from_request(game);
        self.games.write().await.push(game.clone());
        Ok(game)
    }

    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.games.read().await.clone())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> Result<Option<Game>, StoreError> {
        let mut games = self.games.write().await;
        let Some(game) = games.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        apply_changes(game, changes);
        Ok(Some(game.clone()))
    }

    async fn find_by_id_and_remove(&self, id: Uuid) -> Result<Option<Game>, StoreError> {
        let mut games = self.games.write().await;
        let removed = games
            .iter()
            .position(|g| g.id == id)
            .map(|index| games.remove(index));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(title: &str) -> NewGame {
        NewGame {
            title: title.to_string(),
            genre: None,
            release_date: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_keeps_order() {
        let store = MemoryGameStore::new();
        let first = store.create(new_game("Mario Bros.")).await.unwrap();
        let second = store.create(new_game("Tetris")).await.unwrap();

        assert_ne!(first.id, second.id);
        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let store = MemoryGameStore::new();
        store.create(new_game("Tetris")).await.unwrap();

        let updated = store
            .find_by_id_and_update(
                Uuid::new_v4(),
                GameChanges {
                    title: "Tetris 2".to_string(),
                    genre: None,
                    release_date: None,
                },
            )
            .await
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(store.find_all().await.unwrap()[0].title, "Tetris");
    }

    #[tokio::test]
    async fn remove_returns_record_once() {
        let store = MemoryGameStore::new();
        let game = store.create(new_game("Tetris")).await.unwrap();

        let removed = store.find_by_id_and_remove(game.id).await.unwrap();
        assert_eq!(removed, Some(game.clone()));
        assert!(store.find_by_id_and_remove(game.id).await.unwrap().is_none());
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
