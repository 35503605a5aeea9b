//! Thin DOM helpers shared by the UI modules.
//!
//! Element lookups return `Option` and log a warning when something the page
//! expects is absent — the caller then skips its feature instead of failing.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Window};

thread_local! {
    static REDUCED_MOTION: Cell<bool> = const { Cell::new(false) };
}

pub fn set_reduced_motion(value: bool) {
    REDUCED_MOTION.with(|cell| cell.set(value));
}

pub fn reduced_motion() -> bool {
    REDUCED_MOTION.with(|cell| cell.get())
}

pub fn window() -> Window {
    web_sys::window().expect("no global window exists")
}

pub fn document() -> Document {
    window().document().expect("window has no document")
}

pub fn body() -> Option<HtmlElement> {
    document().body()
}

/// Look an element up by id; warn once when it is missing.
pub fn element(id: &str) -> Option<Element> {
    let found = document().get_element_by_id(id);
    if found.is_none() {
        log::warn!("#{id} not found; feature disabled");
    }
    found
}

/// First match for a selector, or None (silently — callers decide to warn).
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

/// All matches for a selector.
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document().query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn viewport_size() -> (f64, f64) {
    let win = window();
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn scroll_top() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

// -- localStorage, degrading silently when the capability is denied --

pub fn storage_get(key: &str) -> Option<String> {
    window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(key: &str, value: &str) {
    if let Ok(Some(storage)) = window().local_storage() {
        let _ = storage.set_item(key, value);
    }
}

// -- Event listener helpers. Closures are intentionally leaked: every
//    listener here lives for the whole page lifetime. --

pub fn on_click(el: &Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_mouse_event(
    target: &EventTarget,
    name: &str,
    mut handler: impl FnMut(MouseEvent) + 'static,
) {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| handler(e));
    let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_keydown(mut handler: impl FnMut(KeyboardEvent) + 'static) {
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| handler(e));
    let _ = document().add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_window_event(name: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    let _ = window().add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}
