//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_theme;

/// Sun/moon button switching dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Toggle dark mode"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.dark_mode.get() { "☀" } else { "☾" }}
        </button>
    }
}
