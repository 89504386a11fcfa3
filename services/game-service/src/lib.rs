//! HTTP API for the games collection.

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod types;
pub mod validation;

pub use routes::create_routes;
pub use store::{GameStore, MemoryGameStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
}

impl AppState {
    pub fn new(store: impl GameStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
