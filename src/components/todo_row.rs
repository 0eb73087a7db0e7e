//! Todo Row Component
//!
//! Individual todo in the list view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{todo_path, Todo, TodoPatch};
use crate::store::{store_completed, store_remove_todo, store_set_completed, use_todo_store};

/// A single todo row: toggle, text, link to the edit page, delete
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let completed = todo.completed;
    let href = todo_path(&todo.id);
    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();

    let toggle = move |_| {
        let id = toggle_id.clone();
        let Some(current) = store_completed(&store, &id) else { return };
        spawn_local(async move {
            match commands::update_todo(&id, &TodoPatch::completed(!current)).await {
                Ok(_) => store_set_completed(&store, &id, !current),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to toggle todo: {}", e).into());
                }
            }
        });
    };

    let delete = move |_| {
        let id = delete_id.clone();
        spawn_local(async move {
            match commands::delete_todo(&id).await {
                Ok(()) => store_remove_todo(&store, &id),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to delete todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="todo-row">
            <button
                class=if completed { "toggle-btn done" } else { "toggle-btn" }
                title="Toggle"
                on:click=toggle
            >
                {if completed { "✓" } else { "" }}
            </button>
            <span class=if completed { "todo-text completed" } else { "todo-text" }>
                {todo.text}
            </span>
            <a class="view-link" href=href>"View"</a>
            <button class="delete-btn" title="Delete" on:click=delete>"×"</button>
        </div>
    }
}
