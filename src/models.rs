//! Frontend Models
//!
//! Data structures matching backend entities.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped in an id path segment (same set as `encodeURIComponent`)
const ID_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: String, text: String) -> Self {
        Self { id, text, completed: false }
    }
}

/// Partial update sent to `PUT /api/todos/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn text(text: String) -> Self {
        Self { text: Some(text), ..Default::default() }
    }

    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Todos passing `filter`, in list order
pub fn visible_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

/// Timestamp-derived id (milliseconds), bumped past any id already in `existing`
pub fn next_todo_id(now_ms: f64, existing: &[Todo]) -> String {
    let mut candidate = now_ms.max(0.0) as u64;
    while existing.iter().any(|todo| todo.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Percent-encode an id for use as one URL path segment
pub fn id_segment(id: &str) -> String {
    utf8_percent_encode(id, ID_SEGMENT_SET).to_string()
}

/// Link to the edit page of a todo
pub fn todo_path(id: &str) -> String {
    format!("/todo/{}", id_segment(id))
}

/// Find the todo named by the `:id` route parameter
///
/// The parameter may arrive encoded or already decoded, so both forms are tried.
pub fn find_by_route_id(todos: Vec<Todo>, param: &str) -> Option<Todo> {
    let decoded = percent_decode_str(param).decode_utf8_lossy();
    todos
        .into_iter()
        .find(|todo| todo.id == param || todo.id == decoded)
}

/// `For` key of a list row
///
/// Duplicate ids are allowed, so the position keeps identical rows apart.
pub fn row_key(index: usize, todo: &Todo) -> (usize, String, String, bool) {
    (index, todo.id.clone(), todo.text.clone(), todo.completed)
}
