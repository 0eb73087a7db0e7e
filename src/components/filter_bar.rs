//! Filter Bar Component
//!
//! All / Active / Completed switch plus the count of open todos.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_todo_store, TodoListStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_todo_store();

    let active_count = move || store.todos().read().iter().filter(|todo| !todo.completed).count();

    view! {
        <div class="filter-bar">
            <span class="item-count">
                {move || match active_count() {
                    1 => "1 item left".to_string(),
                    n => format!("{} items left", n),
                }}
            </span>
            <div class="filter-buttons">
                {Filter::ALL.iter().map(|&filter| {
                    let is_selected = move || store.filter().get() == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store.filter().set(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
