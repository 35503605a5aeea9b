//! Theme toggle: resolves the saved preference (default dark), keeps the
//! `dark-mode` body class and localStorage in sync, and exposes the current
//! theme to the frame runner.

use std::cell::Cell;

use glimmer_engine::{Theme, THEME_STORAGE_KEY};

use crate::dom;

thread_local! {
    static THEME: Cell<Theme> = const { Cell::new(Theme::Dark) };
}

/// The active theme, read once per render by the constellation runner.
pub fn current() -> Theme {
    THEME.with(|cell| cell.get())
}

pub fn init() {
    let saved = dom::storage_get(THEME_STORAGE_KEY);
    let theme = Theme::resolve(saved.as_deref());
    if saved.is_none() {
        // First visit: persist the dark default explicitly.
        dom::storage_set(THEME_STORAGE_KEY, theme.storage_value());
    }
    apply(theme);

    let Some(toggle) = dom::element("themeToggle") else {
        return;
    };
    dom::on_click(&toggle, || {
        let next = current().toggle();
        apply(next);
        dom::storage_set(THEME_STORAGE_KEY, next.storage_value());
    });
}

fn apply(theme: Theme) {
    THEME.with(|cell| cell.set(theme));
    if let Some(body) = dom::body() {
        if theme.is_dark() {
            dom::add_class(&body, "dark-mode");
        } else {
            dom::remove_class(&body, "dark-mode");
        }
    }
}
