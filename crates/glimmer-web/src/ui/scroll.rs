//! Scroll-driven chrome: reading-progress bar, navbar hide/show,
//! scroll-to-top button, smooth anchor scrolling, and section reveal.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use glimmer_engine::extensions::scroll::{reading_progress, scroll_top_visible, NavbarState, ScrollDirection};

use crate::dom;

pub fn init() {
    init_scroll_listener();
    init_scroll_to_top_click();
    init_start_button();
    init_section_reveal();
}

fn init_scroll_listener() {
    let progress_fill = dom::query(".reading-progress-fill");
    if progress_fill.is_none() {
        log::warn!(".reading-progress-fill not found; progress bar disabled");
    }
    let navbar = dom::query(".romantic-navbar");
    if navbar.is_none() {
        log::warn!(".romantic-navbar not found; navbar effects disabled");
    }
    let to_top = dom::query(".scroll-to-top");

    let nav_state = Rc::new(RefCell::new(NavbarState::new()));

    dom::on_window_event("scroll", move || {
        let scroll_top = dom::scroll_top();

        if let Some(fill) = progress_fill.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            let (_, viewport_h) = dom::viewport_size();
            let doc_h = dom::document()
                .document_element()
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(viewport_h);
            let progress = reading_progress(scroll_top, viewport_h, doc_h);
            let _ = fill.style().set_property("width", &format!("{progress}%"));
        }

        if let Some(nav) = navbar.as_ref() {
            let visibility = nav_state.borrow_mut().update(scroll_top);
            if visibility.visible {
                dom::add_class(nav, "visible");
                match visibility.direction {
                    Some(ScrollDirection::Down) => {
                        dom::add_class(nav, "scroll-down");
                        dom::remove_class(nav, "scroll-up");
                    }
                    _ => {
                        dom::remove_class(nav, "scroll-down");
                        dom::add_class(nav, "scroll-up");
                    }
                }
            } else {
                dom::remove_class(nav, "visible");
                dom::remove_class(nav, "scroll-down");
                dom::remove_class(nav, "scroll-up");
            }
        }

        if let Some(btn) = to_top.as_ref() {
            if scroll_top_visible(scroll_top) {
                dom::add_class(btn, "visible");
            } else {
                dom::remove_class(btn, "visible");
            }
        }
    });
}

fn init_scroll_to_top_click() {
    let Some(btn) = dom::query(".scroll-to-top") else {
        return;
    };
    dom::on_click(&btn, || {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        dom::window().scroll_to_with_scroll_to_options(&opts);
    });
}

fn init_start_button() {
    let Some(btn) = dom::element("startBtn") else {
        return;
    };
    dom::on_click(&btn, || {
        if let Some(section) = dom::query(".history") {
            smooth_scroll_into_view(&section);
        }
    });
}

fn smooth_scroll_into_view(el: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Reveal sections and reason cards as they scroll into view.
fn init_section_reveal() {
    let targets = [dom::query_all(".section"), dom::query_all(".reason-card")].concat();
    if targets.is_empty() {
        return;
    }
    if let Err(err) = observe_visibility(&targets) {
        log::warn!("section reveal unavailable: {err:?}");
    }
}

fn observe_visibility(targets: &[Element]) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    dom::add_class(&entry.target(), "visible");
                }
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(0.15));
    opts.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}
