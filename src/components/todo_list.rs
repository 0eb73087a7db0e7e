//! Todo List Page
//!
//! Route `/`. Fetches the full collection every time it mounts, so coming back
//! from the edit page always shows what the server has.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{FilterBar, NewTodoForm, ThemeToggle, TodoRow};
use crate::models::{row_key, visible_todos};
use crate::store::{TodoListState, TodoListStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = Store::new(TodoListState::new());
    provide_context(store);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[LIST] Loaded {} todos", loaded.len()).into());
                    store.todos().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch todos: {}", e).into());
                }
            }
            store.loading().set(false);
        });
    });

    let shown = move || {
        visible_todos(&store.todos().read(), store.filter().get())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="page">
                <header class="page-header">
                    <h1>"TODO"</h1>
                    <ThemeToggle />
                </header>

                <NewTodoForm />

                <div class="todo-card">
                    <For
                        each=shown
                        key=|(index, todo)| row_key(*index, todo)
                        children=move |(_, todo)| view! { <TodoRow todo=todo /> }
                    />
                </div>

                <FilterBar />
            </div>
        </Show>
    }
}
