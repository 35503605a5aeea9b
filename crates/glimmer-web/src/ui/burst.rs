//! DOM side of the decorative emoji effects: the shared rng, element
//! spawning for bursts and falls, the ambient floating hearts, the cursor
//! trail, and the hero-heart confetti.
//!
//! `init` is only called when reduced motion is off; the helpers used by
//! other modules (sparkles, confetti) re-check the flag themselves.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use glimmer_engine::extensions::burst::{
    self, confetti_rain, floating_hearts, ring, BurstSpark, COMPLETION_EMOJIS,
    CARD_SPARKLE_EMOJIS, HEART_CONFETTI_EMOJIS, MINI_CONFETTI_EMOJIS, SPARKLE_EMOJIS,
};
use glimmer_engine::Rng;

use crate::dom;

thread_local! {
    static RNG: RefCell<Rng> = RefCell::new(Rng::new(js_sys::Date::now() as u64));
    static LAST_TRAIL_MS: Cell<f64> = const { Cell::new(0.0) };
}

/// Milliseconds between cursor-trail stars.
const TRAIL_DELAY_MS: f64 = 80.0;

pub fn with_rng<R>(f: impl FnOnce(&mut Rng) -> R) -> R {
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

pub fn init() {
    spawn_floating_hearts();
    init_cursor_trail();
    init_hero_heart();
}

/// Ambient floating hearts behind the page.
fn spawn_floating_hearts() {
    let container = match dom::query(".floating-hearts-container") {
        Some(el) => el,
        None => {
            // Create the layer when the page does not ship one.
            let Ok(el) = dom::document().create_element("div") else {
                return;
            };
            el.set_class_name("floating-hearts-container");
            if let Some(body) = dom::body() {
                let _ = body.append_child(&el);
            }
            el
        }
    };

    let hearts = with_rng(|rng| floating_hearts(8, rng));
    for heart in hearts {
        let Some(el) = make_overlay(heart.emoji, "floating-heart") else {
            continue;
        };
        set_style(
            &el,
            &format!(
                "left: {}%; animation-duration: {}s; animation-delay: {}s;",
                heart.left_pct, heart.duration_s, heart.delay_s
            ),
        );
        set_var(&el, "--drift", &format!("{}px", heart.drift_px));
        set_var(&el, "--rotation", &format!("{}deg", heart.rotation_deg));
        let _ = container.append_child(&el);
    }
}

/// Sparkle stars following the pointer, throttled, desktop only.
fn init_cursor_trail() {
    dom::on_mouse_event(&dom::document(), "mousemove", |e| {
        let now = js_sys::Date::now();
        let due = LAST_TRAIL_MS.with(|last| {
            if now - last.get() < TRAIL_DELAY_MS {
                return false;
            }
            last.set(now);
            true
        });
        if !due {
            return;
        }

        let star = with_rng(|rng| burst::pick(SPARKLE_EMOJIS, rng));
        let Some(el) = make_overlay(star, "cursor-trail") else {
            return;
        };
        set_style(
            &el,
            &format!("left: {}px; top: {}px;", e.client_x(), e.client_y()),
        );
        append_to_body(&el);
        remove_after(el, 800);
    });
}

/// The hero heart: click reveals the message and fires a confetti ring.
fn init_hero_heart() {
    let Some(heart) = dom::element("heart") else {
        return;
    };
    let Some(message) = dom::element("heartMsg") else {
        return;
    };

    let heart_for_click = heart.clone();
    dom::on_click(&heart, move || {
        dom::remove_class(&message, "hidden");
        let msg = message.clone();
        // Small delay so the CSS transition catches the class change.
        Timeout::new(10, move || dom::add_class(&msg, "show")).forget();

        let rect = heart_for_click.get_bounding_client_rect();
        let cx = rect.left() + rect.width() / 2.0;
        let cy = rect.top() + rect.height() / 2.0;
        let sparks = with_rng(|rng| ring(HEART_CONFETTI_EMOJIS, 6, 100.0, 50.0, rng));
        spawn_ring(&sparks, cx, cy, "confetti-spark");

        // Stop the heartbeat once acknowledged.
        if let Some(heart_el) = heart_for_click.dyn_ref::<HtmlElement>() {
            let _ = heart_el.style().set_property("animation", "none");
        }
    });
}

/// Sparkle ring around a flipped memory card.
pub fn card_sparkles(center_x: f64, center_y: f64) {
    if dom::reduced_motion() {
        return;
    }
    let sparks = with_rng(|rng| ring(CARD_SPARKLE_EMOJIS, 5, 60.0, 40.0, rng));
    spawn_ring(&sparks, center_x, center_y, "sparkle-burst");
}

/// Small centered burst for a right quiz answer.
pub fn mini_confetti() {
    if dom::reduced_motion() {
        return;
    }
    let (w, h) = dom::viewport_size();
    let sparks = with_rng(|rng| ring(MINI_CONFETTI_EMOJIS, 3, 100.0, 0.0, rng));
    spawn_ring(&sparks, w / 2.0, h / 2.0, "confetti-spark");
}

/// Staggered confetti rain for completing the memory board.
pub fn completion_confetti() {
    if dom::reduced_motion() {
        return;
    }
    let pieces = with_rng(|rng| confetti_rain(COMPLETION_EMOJIS, 30, rng));
    for (i, piece) in pieces.into_iter().enumerate() {
        let stagger = (i as u32) * 50;
        Timeout::new(stagger, move || {
            let Some(el) = make_overlay(piece.emoji, "falling-confetti") else {
                return;
            };
            set_style(
                &el,
                &format!(
                    "left: {}vw; font-size: {}rem; animation-duration: {}s;",
                    piece.left_pct, piece.font_size_rem, piece.duration_s
                ),
            );
            set_var(&el, "--x-offset", &format!("{}px", piece.drift_px));
            append_to_body(&el);
            remove_after(el, 5000);
        })
        .forget();
    }
}

// -- element plumbing --

fn spawn_ring(sparks: &[BurstSpark], cx: f64, cy: f64, class: &str) {
    for spark in sparks {
        let Some(el) = make_overlay(spark.emoji, class) else {
            continue;
        };
        set_style(&el, &format!("left: {cx}px; top: {cy}px;"));
        set_var(&el, "--burst-x", &format!("{}px", spark.offset.x));
        set_var(&el, "--burst-y", &format!("{}px", spark.offset.y));
        append_to_body(&el);
        remove_after(el, (spark.duration_s * 1000.0) as u32);
    }
}

fn make_overlay(emoji: &str, class: &str) -> Option<Element> {
    let el = dom::document().create_element("div").ok()?;
    el.set_class_name(class);
    el.set_text_content(Some(emoji));
    Some(el)
}

fn append_to_body(el: &Element) {
    if let Some(body) = dom::body() {
        let _ = body.append_child(el);
    }
}

fn remove_after(el: Element, ms: u32) {
    Timeout::new(ms, move || el.remove()).forget();
}

fn set_style(el: &Element, css: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        // Append so class-level positioning from make_overlay survives.
        let existing = html.style().css_text();
        html.style().set_css_text(&format!("{existing}{css}"));
    }
}

fn set_var(el: &Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(name, value);
    }
}
