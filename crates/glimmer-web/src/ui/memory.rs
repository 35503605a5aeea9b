//! Memory-card grid: flip handling, the soft flip tone, per-card sparkles,
//! and the one-time completion celebration.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, Element, OscillatorType};

use glimmer_engine::{ContentManifest, MemoryBoard};

use crate::dom;
use crate::ui::burst;

thread_local! {
    static BOARD: RefCell<Option<MemoryBoard>> = const { RefCell::new(None) };
}

pub fn init(manifest: &ContentManifest) {
    let cards = dom::query_all(".memory-card");
    if cards.is_empty() {
        log::warn!("memory cards not found; memory game disabled");
        return;
    }

    BOARD.with(|cell| {
        *cell.borrow_mut() = Some(MemoryBoard::new(cards.len()));
    });

    for (index, card) in cards.into_iter().enumerate() {
        fill_card_content(&card, index, manifest);
        let card_for_click = card.clone();
        dom::on_click(&card, move || handle_flip(index, &card_for_click));
    }
}

fn fill_card_content(card: &Element, index: usize, manifest: &ContentManifest) {
    if manifest.memory_cards.is_empty() {
        return;
    }
    let content = &manifest.memory_cards[index % manifest.memory_cards.len()];

    if let Ok(Some(message_el)) = card.query_selector(".card-message") {
        dom::set_text(&message_el, &content.message);
    }
    if let Ok(Some(icon_el)) = card.query_selector(".card-icon") {
        let empty = icon_el
            .text_content()
            .map(|t| t.trim().is_empty())
            .unwrap_or(true);
        if empty {
            dom::set_text(&icon_el, &content.icon);
        }
    }
}

fn handle_flip(index: usize, card: &Element) {
    let flipped = BOARD.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .and_then(|board| board.flip(index))
    });

    match flipped {
        Some(true) => {
            dom::add_class(card, "flipped");
            play_flip_tone();

            let rect = card.get_bounding_client_rect();
            burst::card_sparkles(
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            );

            // Give the flip animation time to finish before celebrating.
            Timeout::new(800, check_completion).forget();
        }
        Some(false) => dom::remove_class(card, "flipped"),
        None => {}
    }
}

fn check_completion() {
    let celebrate = BOARD.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(|board| board.take_celebration())
            .unwrap_or(false)
    });
    if !celebrate {
        return;
    }

    show_completion_message();
    burst::completion_confetti();
}

fn show_completion_message() {
    let existing = dom::query(".memory-completion");
    let banner = match existing {
        Some(el) => el,
        None => {
            let Ok(el) = dom::document().create_element("div") else {
                return;
            };
            el.set_class_name("memory-completion");
            let Ok(heading) = dom::document().create_element("h3") else {
                return;
            };
            dom::set_text(&heading, "¡Has descubierto todos los mensajes! 💖");
            let _ = el.append_child(&heading);

            match dom::query(".memory-game") {
                Some(section) => {
                    let _ = section.append_child(&el);
                }
                None => return,
            }
            el
        }
    };

    Timeout::new(300, move || dom::add_class(&banner, "show")).forget();
}

/// A short sine blip (C5) on card flip. Purely optional: any missing Web
/// Audio capability makes this a silent no-op.
fn play_flip_tone() {
    if dom::reduced_motion() {
        return;
    }
    let _ = try_play_tone();
}

fn try_play_tone() -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.frequency().set_value(523.25); // C5
    oscillator.set_type(OscillatorType::Sine);

    let now = ctx.current_time();
    gain.gain().set_value_at_time(0.1, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.01, now + 0.2)?;

    oscillator.start()?;
    oscillator.stop_with_when(now + 0.2)?;
    Ok(())
}
