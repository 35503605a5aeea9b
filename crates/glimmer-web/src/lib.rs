//! Browser entry point.
//!
//! `boot.js` fetches the content manifest and calls [`boot`] once the wasm
//! module is instantiated. Every page feature initializes independently and
//! degrades to inert when its DOM is missing; only the reduced-motion
//! preference gates the decorative modules wholesale.

use wasm_bindgen::prelude::*;

use glimmer_engine::ContentManifest;

mod dom;
mod runner;
mod surface;
mod ui;

#[wasm_bindgen]
pub fn boot(manifest_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let manifest = match ContentManifest::from_json(manifest_json) {
        Ok(m) => m,
        Err(err) => {
            log::warn!("content manifest rejected ({err}); page runs without content");
            ContentManifest {
                letter: String::new(),
                memory_cards: Vec::new(),
                quiz: Vec::new(),
            }
        }
    };

    let reduced_motion = dom::prefers_reduced_motion();
    dom::set_reduced_motion(reduced_motion);
    if reduced_motion {
        log::info!("reduced motion preferred: decorative animation stays off");
    }

    // Always-on features (mostly CSS-driven, no continuous animation).
    ui::theme::init();
    ui::scroll::init();
    ui::letter::init(&manifest);
    ui::memory::init(&manifest);
    ui::quiz::init(&manifest);

    // Decorative layer: constellation, floating hearts, cursor trail.
    if !reduced_motion {
        ui::burst::init();
        runner::start();
    }

    log::info!("glimmer: initialized");
}
