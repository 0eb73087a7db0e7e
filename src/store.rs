//! List View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Filter, Todo};

/// State behind the list page, rebuilt each time the page mounts
#[derive(Clone, Debug, Store)]
pub struct TodoListState {
    /// Todos as last fetched, plus local changes since
    pub todos: Vec<Todo>,
    /// Which todos are rendered
    pub filter: Filter,
    /// True until the first fetch settles
    pub loading: bool,
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            filter: Filter::All,
            loading: true,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoListState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a todo to the store
pub fn store_add_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Set the completed flag of every todo with this ID
pub fn store_set_completed(store: &TodoStore, todo_id: &str, completed: bool) {
    store.todos().write().iter_mut()
        .filter(|todo| todo.id == todo_id)
        .for_each(|todo| todo.completed = completed);
}

/// Remove every todo with this ID
pub fn store_remove_todo(store: &TodoStore, todo_id: &str) {
    store.todos().write().retain(|todo| todo.id != todo_id);
}

/// Current completed flag of a todo, if it is in the store
pub fn store_completed(store: &TodoStore, todo_id: &str) -> Option<bool> {
    store.todos().read_untracked().iter()
        .find(|todo| todo.id == todo_id)
        .map(|todo| todo.completed)
}
