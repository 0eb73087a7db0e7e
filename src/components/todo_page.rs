//! Todo Edit Page
//!
//! Route `/todo/:id`. There is no single-item endpoint, so the page loads the
//! whole collection and picks the todo out by id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::commands;
use crate::components::ThemeToggle;
use crate::models::{find_by_route_id, Todo, TodoPatch};

#[component]
pub fn TodoPage() -> impl IntoView {
    let params = use_params_map();
    let todo_id = move || params.read().get("id").unwrap_or_default();

    let (todo, set_todo) = signal(None::<Todo>);
    let (edit_text, set_edit_text) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);

    // Reload whenever the id in the URL changes
    Effect::new(move |_| {
        let id = todo_id();
        set_is_loading.set(true);
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(todos) => {
                    let found = find_by_route_id(todos, &id);
                    if let Some(t) = &found {
                        set_edit_text.set(t.text.clone());
                    }
                    set_todo.set(found);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch todo: {}", e).into());
                }
            }
            set_is_loading.set(false);
        });
    });

    let navigate = use_navigate();

    let save = {
        let navigate = navigate.clone();
        move |id: String| {
            let navigate = navigate.clone();
            let text = edit_text.get_untracked();
            spawn_local(async move {
                match commands::update_todo(&id, &TodoPatch::text(text)).await {
                    Ok(_) => navigate("/", Default::default()),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to update todo: {}", e).into());
                    }
                }
            });
        }
    };

    let delete = move |id: String| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match commands::delete_todo(&id).await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to delete todo: {}", e).into());
                }
            }
        });
    };

    move || {
        if is_loading.get() {
            return view! { <div class="page">"Loading..."</div> }.into_any();
        }
        let Some(current) = todo.get() else {
            return view! { <div class="page">"Todo not found"</div> }.into_any();
        };

        let save = save.clone();
        let delete = delete.clone();
        let save_id = current.id.clone();
        let delete_id = current.id;

        view! {
            <div class="page">
                <header class="page-header">
                    <a class="back-link" href="/">"← Back to todos"</a>
                    <ThemeToggle />
                </header>

                <div class="todo-card edit-card">
                    <h1>"Edit Todo"</h1>
                    <label class="field-label">
                        "Todo Text"
                        <input
                            type="text"
                            prop:value=move || edit_text.get()
                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="edit-actions">
                        <button class="save-btn" on:click=move |_| save(save_id.clone())>
                            "Save Changes"
                        </button>
                        <button class="danger-btn" on:click=move |_| delete(delete_id.clone())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
