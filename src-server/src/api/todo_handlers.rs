//! Todo HTTP Handlers
//!
//! `GET/POST /api/todos`, `PUT/DELETE /api/todos/{id}`.
//! Bodies are parsed inside the handlers so that malformed JSON takes the same
//! 500 path as a storage failure.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{NewTodo, Todo, TodoPatch};
use crate::repository::Repository;
use crate::AppState;
use super::error::{ApiError, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, UPDATE_FAILED};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// List the whole collection
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .todo_repo
        .list()
        .await
        .map_err(|e| ApiError::internal(FETCH_FAILED, e))?;
    Ok(Json(todos))
}

/// Append one item
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let new_todo: NewTodo =
        serde_json::from_slice(&body).map_err(|e| ApiError::internal(CREATE_FAILED, e))?;
    let todo = new_todo.into_todo();

    let created = state
        .todo_repo
        .create(&todo)
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED, e))?;

    tracing::info!(id = %created.id, "todo created");
    Ok(Json(created))
}

/// Shallow-merge the body into the item with this id, echoing the body back
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let submitted: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
    let patch: TodoPatch = serde_json::from_value(submitted.clone())
        .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
    if patch.is_empty() {
        tracing::debug!(%id, "update carries no known fields");
    }

    let matched = state
        .todo_repo
        .update(&id, &patch)
        .await
        .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;

    if matched == 0 {
        tracing::debug!(%id, "update matched no todo");
    } else {
        tracing::info!(%id, "todo updated");
    }
    Ok(Json(submitted))
}

/// Remove every item with this id; a missing id still succeeds
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = state
        .todo_repo
        .delete(&id)
        .await
        .map_err(|e| ApiError::internal(DELETE_FAILED, e))?;

    if removed == 0 {
        tracing::debug!(%id, "delete matched no todo");
    } else {
        tracing::info!(%id, removed, "todo deleted");
    }
    Ok(Json(DeleteResponse { success: true }))
}
