//! New Todo Form Component
//!
//! Text input plus submit button at the top of the list page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{next_todo_id, Todo};
use crate::store::{store_add_todo, use_todo_store, TodoListStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked().trim().to_string();
        if text.is_empty() { return; }

        let id = next_todo_id(js_sys::Date::now(), &store.todos().read_untracked());
        let todo = Todo::new(id, text);

        spawn_local(async move {
            match commands::create_todo(&todo).await {
                Ok(_) => {
                    store_add_todo(&store, todo);
                    set_new_text.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to add todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Create a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" title="Add">"+"</button>
        </form>
    }
}
