//! The love-letter modal: envelope animation, typewriter reveal, and
//! falling petals while the letter is open.

use std::cell::RefCell;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use glimmer_engine::extensions::burst::{petals, Petal};
use glimmer_engine::extensions::letter::CHAR_INTERVAL_MS;
use glimmer_engine::{ContentManifest, Typewriter, TypewriterTick};

use crate::dom;
use crate::ui::burst::with_rng;

thread_local! {
    static TYPEWRITER: RefCell<Option<Typewriter>> = const { RefCell::new(None) };
    static TYPE_TIMER: RefCell<Option<Interval>> = const { RefCell::new(None) };
    static PETAL_TIMER: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

pub fn init(manifest: &ContentManifest) {
    let open_btn = dom::element("openLetterBtn");
    let modal = dom::element("loveLetterModal");
    let close_btn = dom::query(".close-letter");
    let envelope = dom::query(".envelope-container");
    let text_el = dom::element("letterText");

    let (Some(open_btn), Some(modal), Some(close_btn), Some(envelope), Some(text_el)) =
        (open_btn, modal, close_btn, envelope, text_el)
    else {
        log::warn!("love letter elements not found; letter disabled");
        return;
    };

    TYPEWRITER.with(|cell| {
        *cell.borrow_mut() = Some(Typewriter::new(manifest.letter.clone()));
    });

    {
        let modal = modal.clone();
        let envelope = envelope.clone();
        let text_el = text_el.clone();
        dom::on_click(&open_btn, move || {
            open_letter(&modal, &envelope, &text_el);
        });
    }
    {
        let modal = modal.clone();
        let envelope = envelope.clone();
        let text_el = text_el.clone();
        dom::on_click(&close_btn, move || {
            close_letter(&modal, &envelope, &text_el);
        });
    }
    {
        // Click on the backdrop closes too.
        let modal_for_cb = modal.clone();
        let envelope = envelope.clone();
        let text_el = text_el.clone();
        dom::on_mouse_event(&modal, "click", move |e| {
            let hit_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == modal_for_cb);
            if hit_backdrop {
                close_letter(&modal_for_cb, &envelope, &text_el);
            }
        });
    }
    {
        let modal = modal.clone();
        dom::on_keydown(move |e| {
            if e.key() == "Escape" && dom::has_class(&modal, "active") {
                if let (Some(envelope), Some(text_el)) =
                    (dom::query(".envelope-container"), dom::element("letterText"))
                {
                    close_letter(&modal, &envelope, &text_el);
                }
            }
        });
    }
}

fn open_letter(modal: &Element, envelope: &Element, text_el: &Element) {
    dom::add_class(modal, "active");
    set_body_overflow("hidden");

    let envelope = envelope.clone();
    Timeout::new(600, move || dom::add_class(&envelope, "opened")).forget();

    if !dom::reduced_motion() {
        Timeout::new(2500, start_petals).forget();
    }

    let text_el = text_el.clone();
    Timeout::new(3000, move || start_typewriter(&text_el)).forget();
}

fn close_letter(modal: &Element, envelope: &Element, text_el: &Element) {
    dom::remove_class(envelope, "opened");

    let modal = modal.clone();
    let text_el = text_el.clone();
    Timeout::new(800, move || {
        dom::remove_class(&modal, "active");
        set_body_overflow("");

        stop_typewriter();
        dom::set_text(&text_el, "");
        dom::remove_class(&text_el, "typing");
        TYPEWRITER.with(|cell| {
            if let Some(tw) = cell.borrow_mut().as_mut() {
                tw.reset();
            }
        });

        stop_petals();
        if let Some(container) = dom::element("petalsContainer") {
            container.set_inner_html("");
        }
    })
    .forget();
}

fn start_typewriter(text_el: &Element) {
    dom::add_class(text_el, "typing");
    let text_el = text_el.clone();
    let timer = Interval::new(CHAR_INTERVAL_MS, move || {
        let tick = TYPEWRITER.with(|cell| {
            let mut borrow = cell.borrow_mut();
            let Some(tw) = borrow.as_mut() else {
                return TypewriterTick::Done;
            };
            let tick = tw.tick();
            dom::set_text(&text_el, tw.visible());
            tick
        });
        if tick == TypewriterTick::Done {
            dom::remove_class(&text_el, "typing");
            // Deferred: the interval must not drop its own executing closure.
            Timeout::new(0, stop_typewriter).forget();
        }
    });
    TYPE_TIMER.with(|cell| *cell.borrow_mut() = Some(timer));
}

fn stop_typewriter() {
    // Dropping the interval cancels it.
    TYPE_TIMER.with(|cell| cell.borrow_mut().take());
}

fn start_petals() {
    let Some(container) = dom::element("petalsContainer") else {
        return;
    };

    for petal in with_rng(|rng| petals(20, rng)) {
        spawn_petal(&container, &petal);
    }

    // Keep a light drizzle while the modal stays open.
    let timer = Interval::new(2000, || {
        let Some(container) = dom::element("petalsContainer") else {
            return;
        };
        let petal = with_rng(|rng| petals(1, rng)).remove(0);
        spawn_petal(&container, &petal);
    });
    PETAL_TIMER.with(|cell| *cell.borrow_mut() = Some(timer));
}

fn stop_petals() {
    PETAL_TIMER.with(|cell| cell.borrow_mut().take());
}

fn spawn_petal(container: &Element, petal: &Petal) {
    let Ok(el) = dom::document().create_element("div") else {
        return;
    };
    el.set_class_name("petal");
    el.set_text_content(Some(petal.emoji));
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(&format!(
            "left: {}%; animation-duration: {}s; animation-delay: {}s;",
            petal.left_pct, petal.duration_s, petal.delay_s
        ));
        let _ = html
            .style()
            .set_property("--x-offset", &format!("{}px", petal.drift_px));
    }
    let _ = container.append_child(&el);

    let el_for_removal = el.clone();
    let ttl = ((petal.duration_s + petal.delay_s) * 1000.0) as u32;
    Timeout::new(ttl, move || el_for_removal.remove()).forget();
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::body() {
        let _ = body.style().set_property("overflow", value);
    }
}
