use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use common::{CreateGameRequest, Game, ServiceError, UpdateGameRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::validation::{self, GAME_NOT_FOUND};

const SAVE_FAILED: &str = "Error saving data to the DB";
const STORE_FAILED: &str = "Something really bad happened";

pub async fn list_games_http(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<Game>>, ApiError> {
    let games = state.store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list games");
        ApiError::store(STORE_FAILED, e)
    })?;

    tracing::debug!("Returning {} games", games.len());
    Ok(ResponseJson(games))
}

pub async fn create_game_http(
    State(state): State<AppState>,
    request: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<Game>), ApiError> {
    let new_game = validation::validate_create_game_request(body_or_default(request))?;

    let game = state.store.create(new_game).await.map_err(|e| {
        tracing::error!(error = %e, "failed to create game");
        ApiError::store(SAVE_FAILED, e)
    })?;

    tracing::info!(id = %game.id, title = %game.title, "Game created");
    Ok((StatusCode::CREATED, ResponseJson(game)))
}

pub async fn update_game_http(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdateGameRequest>, JsonRejection>,
) -> Result<ResponseJson<Game>, ApiError> {
    let changes = validation::validate_update_game_request(&id, body_or_default(request))?;
    let id = validation::parse_game_id(&id)?;

    let updated = state
        .store
        .find_by_id_and_update(id, changes)
        .await
        .map_err(|e| {
            tracing::error!(id = %id, error = %e, "failed to update game");
            ApiError::store(STORE_FAILED, e)
        })?;

    match updated {
        Some(game) => {
            tracing::info!(id = %game.id, title = %game.title, "Game updated");
            Ok(ResponseJson(game))
        }
        None => Err(not_found()),
    }
}

/// `PUT /api/games` and `PUT /api/games/` carry no id segment.
pub async fn update_game_without_id_http() -> ApiError {
    ApiError(ServiceError::Validation(validation::MISSING_TITLE_OR_ID.to_string()))
}

pub async fn delete_game_http(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    validation::validate_id(&id)?;
    let id = validation::parse_game_id(&id)?;

    let removed = state.store.find_by_id_and_remove(id).await.map_err(|e| {
        tracing::error!(id = %id, error = %e, "failed to delete game");
        ApiError::store(STORE_FAILED, e)
    })?;

    match removed {
        Some(_) => {
            tracing::info!(id = %id, "Game deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(not_found()),
    }
}

/// `DELETE /api/games` and `DELETE /api/games/` carry no id segment.
pub async fn delete_game_without_id_http() -> ApiError {
    ApiError(ServiceError::Validation(validation::MISSING_ID.to_string()))
}

/// A missing or unreadable body carries no fields, so it fails the same
/// presence checks as an empty object.
fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable request body");
            T::default()
        }
    }
}

fn not_found() -> ApiError {
    ApiError(ServiceError::NotFound(GAME_NOT_FOUND.to_string()))
}
