//! Todo Frontend App
//!
//! Root component: theme context plus the two client-side routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{TodoList, TodoPage};
use crate::context::{load_dark_mode, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (dark_mode, set_dark_mode) = signal(load_dark_mode());

    // Provide context to all children
    provide_context(ThemeContext::new((dark_mode, set_dark_mode)));

    view! {
        <div class=move || if dark_mode.get() { "app dark" } else { "app" }>
            <Router>
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=TodoList />
                    <Route path=path!("/todo/:id") view=TodoPage />
                </Routes>
            </Router>
        </div>
    }
}
