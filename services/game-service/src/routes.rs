use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers::{
    create_game_http, delete_game_http, delete_game_without_id_http, list_games_http,
    update_game_http, update_game_without_id_http,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/games",
            get(list_games_http)
                .post(create_game_http)
                .put(update_game_without_id_http)
                .delete(delete_game_without_id_http),
        )
        .route(
            "/api/games/",
            put(update_game_without_id_http).delete(delete_game_without_id_http),
        )
        .route("/api/games/{id}", put(update_game_http).delete(delete_game_http))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
