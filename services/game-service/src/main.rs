use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_service::config::{Config, StoreKind};
use game_service::db::PgGameStore;
use game_service::{create_routes, AppState, MemoryGameStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let state = match config.store {
        StoreKind::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let store = PgGameStore::connect(database_url, config.max_connections).await?;
            tracing::info!("Connected to database");
            AppState::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("GAMES_STORE=memory - games will not survive a restart");
            AppState::new(MemoryGameStore::new())
        }
    };

    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!("HTTP API server listening on http://{}", config.http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
