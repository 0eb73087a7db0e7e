//! API Layer
//!
//! HTTP router bridging the browser UI to the repository.
//!
//! # Endpoints
//!
//! - `GET /api/todos` - List all todos
//! - `POST /api/todos` - Create a todo
//! - `PUT /api/todos/{id}` - Shallow-merge a partial todo
//! - `DELETE /api/todos/{id}` - Delete a todo
//!
//! Everything outside `/api` is served from the built UI directory, falling
//! back to `index.html` so client-side routes load on refresh.

mod error;
mod todo_handlers;

use std::path::Path;

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::AppState;
use todo_handlers::{create_todo, delete_todo, list_todos, update_todo};

/// Routes under `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .fallback(api_not_found)
}

async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the application router
///
/// `dist_dir` is the Trunk output directory; `None` serves the API only.
pub fn create_router(state: AppState, dist_dir: Option<&Path>) -> Router {
    let router = Router::new().nest("/api", api_routes());

    let router = match dist_dir {
        Some(dist) => {
            let index = dist.join("index.html");
            router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
