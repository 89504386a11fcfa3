use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod models {
    use super::*;

    /// A game as stored and returned by the API.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Game {
        pub id: Uuid,
        pub title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub genre: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub release_date: Option<String>,
    }

    /// Body of `POST /api/games`. Every field is optional on the wire so a
    /// missing title is reported by validation rather than by the extractor.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateGameRequest {
        pub title: Option<String>,
        pub genre: Option<String>,
        pub release_date: Option<String>,
    }

    /// Body of `PUT /api/games/{id}`.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateGameRequest {
        pub title: Option<String>,
        pub genre: Option<String>,
        pub release_date: Option<String>,
    }

    /// A validated create request. The store assigns the id.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NewGame {
        pub title: String,
        pub genre: Option<String>,
        pub release_date: Option<String>,
    }

    /// A validated update. `None` leaves the stored value untouched.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GameChanges {
        pub title: String,
        pub genre: Option<String>,
        pub release_date: Option<String>,
    }
}

pub mod utils {
    use super::*;

    pub fn create_game_from_request(request: NewGame) -> Game {
        Game {
            id: Uuid::new_v4(),
            title: request.title,
            genre: request.genre,
            release_date: request.release_date,
        }
    }

    pub fn apply_changes(game: &mut Game, changes: GameChanges) {
        game.title = changes.title;
        if let Some(genre) = changes.genre {
            game.genre = Some(genre);
        }
        if let Some(release_date) = changes.release_date {
            game.release_date = Some(release_date);
        }
    }
}

pub mod errors {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ServiceError {
        #[error("Not found: {0}")]
        NotFound(String),
        #[error("Validation error: {0}")]
        Validation(String),
        #[error("{message}: {error}")]
        Internal { message: String, error: String },
    }
}

pub use models::*;
pub use utils::*;
pub use errors::*;
