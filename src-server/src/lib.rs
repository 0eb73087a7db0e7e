//! Todo Backend
//!
//! Layered architecture:
//! - domain: Core entities
//! - repository: Data access abstractions and the JSON file implementation
//! - api: axum handlers and router

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;

use config::Config;
use repository::{JsonStore, TodoRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_repo: Arc<TodoRepository>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            todo_repo: Arc::new(TodoRepository::new(store)),
        }
    }
}

/// Bind and serve until the process is stopped
pub async fn run(config: Config) -> anyhow::Result<()> {
    if let Some(parent) = config.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let state = AppState::new(JsonStore::new(config.db.clone()));
    let dist_dir = config.dist_dir();
    if dist_dir.is_none() {
        tracing::warn!(dist = %config.dist.display(), "UI not built, serving API only");
    }
    let app = api::create_router(state, dist_dir);

    tracing::info!(db = %config.db.display(), "listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
