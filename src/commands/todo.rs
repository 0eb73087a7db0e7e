//! Todo Commands
//!
//! Frontend bindings for the `/api/todos` endpoints.

use serde::Deserialize;
use crate::models::{id_segment, Todo, TodoPatch};
use super::fetch_json;

#[derive(Deserialize)]
struct DeleteResult {
    success: bool,
}

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    fetch_json("GET", "/todos", None).await
}

pub async fn create_todo(todo: &Todo) -> Result<Todo, String> {
    let body = serde_json::to_string(todo).map_err(|e| e.to_string())?;
    fetch_json("POST", "/todos", Some(body)).await
}

/// Returns the patch as echoed by the server
pub async fn update_todo(id: &str, patch: &TodoPatch) -> Result<TodoPatch, String> {
    let body = serde_json::to_string(patch).map_err(|e| e.to_string())?;
    fetch_json("PUT", &format!("/todos/{}", id_segment(id)), Some(body)).await
}

pub async fn delete_todo(id: &str) -> Result<(), String> {
    let result: DeleteResult =
        fetch_json("DELETE", &format!("/todos/{}", id_segment(id)), None).await?;
    if result.success {
        Ok(())
    } else {
        Err(format!("delete of {} reported failure", id))
    }
}
