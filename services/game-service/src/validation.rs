use common::{CreateGameRequest, GameChanges, NewGame, ServiceError, UpdateGameRequest};
use uuid::Uuid;

pub const MISSING_TITLE: &str = "Must Provide a title";
pub const MISSING_TITLE_OR_ID: &str = "Must Provide a title && Id";
pub const MISSING_ID: &str = "You need to give me an ID";
pub const GAME_NOT_FOUND: &str = "Game not found";

fn present(value: Option<&str>) -> bool {
     value.is_some_and(|v| !v.trim().is_empty())
}

pub fn validate_id(id: &str) -> Result<(), ServiceError> {
     if !present(Some(id)) {
          return Err(ServiceError::Validation(MISSING_ID.to_string()));
     }
     Ok(())
}

/// A non-empty id that is not a UUID cannot match any stored game.
pub fn parse_game_id(id: &str) -> Result<Uuid, ServiceError> {
     Uuid::parse_str(id.trim()).map_err(|_| ServiceError::NotFound(GAME_NOT_FOUND.to_string()))
}

pub fn validate_create_game_request(req: CreateGameRequest) -> Result<NewGame, ServiceError> {
     match req.title {
          Some(title) if present(Some(&title)) => Ok(NewGame {
               title,
               genre: req.genre,
               release_date: req.release_date,
          }),
          _ => Err(ServiceError::Validation(MISSING_TITLE.to_string())),
     }
}

pub fn validate_update_game_request(
     id: &str,
     req: UpdateGameRequest,
) -> Result<GameChanges, ServiceError> {
     if !present(Some(id)) || !present(req.title.as_deref()) {
          return Err(ServiceError::Validation(MISSING_TITLE_OR_ID.to_string()));
     }

     Ok(GameChanges {
          title: req.title.unwrap_or_default(),
          genre: req.genre,
          release_date: req.release_date,
     })
}
