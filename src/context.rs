//! Application Context
//!
//! Theme state provided via Leptos Context API and kept in localStorage.

use leptos::prelude::*;

const DARK_MODE_KEY: &str = "todo.darkMode";

/// App-wide theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Dark mode on/off - read
    pub dark_mode: ReadSignal<bool>,
    /// Dark mode on/off - write
    set_dark_mode: WriteSignal<bool>,
}

impl ThemeContext {
    pub fn new(dark_mode: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            dark_mode: dark_mode.0,
            set_dark_mode: dark_mode.1,
        }
    }

    /// Flip dark mode and remember the choice
    pub fn toggle(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.set_dark_mode.set(dark);
        save_dark_mode(dark);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved dark-mode choice, false when nothing is stored
pub fn load_dark_mode() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

fn save_dark_mode(dark: bool) {
    if let Some(storage) = local_storage() {
        if storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" }).is_err() {
            web_sys::console::warn_1(&"[THEME] Could not persist dark mode".into());
        }
    }
}
