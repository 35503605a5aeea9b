//! Frame runner for the constellation canvas.
//!
//! The engine exposes pure per-frame operations; this module owns the loop.
//! A `requestAnimationFrame` closure drains the input queue, steps the
//! simulation on a fixed 60 Hz timestep, and replays the draw list onto the
//! Canvas2D surface. Pointer and resize handlers only push events — all
//! mutation happens on the frame tick, cooperatively single-threaded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use glimmer_engine::{
    Constellation, ConstellationConfig, DrawList, FixedTimestep, InputEvent, InputQueue,
};

use crate::dom;
use crate::surface::Canvas2dSurface;
use crate::ui;

const CANVAS_ID: &str = "constellation-canvas";
const STEP_DT: f32 = 1.0 / 60.0;

struct Runner {
    sim: Constellation,
    draw_list: DrawList,
    input: InputQueue,
    timestep: FixedTimestep,
    surface: Canvas2dSurface,
}

thread_local! {
    static RUNNER: RefCell<Option<Runner>> = const { RefCell::new(None) };
}

fn push_input(event: InputEvent) {
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow_mut().as_mut() {
            runner.input.push(event);
        }
    });
}

/// Build the simulation and start the frame loop.
/// No canvas, no 2d context → warn and leave the page static.
pub fn start() {
    let Some(canvas) = dom::element(CANVAS_ID) else {
        return;
    };
    let canvas: HtmlCanvasElement = match canvas.dyn_into() {
        Ok(c) => c,
        Err(_) => {
            log::warn!("#{CANVAS_ID} is not a canvas; constellation disabled");
            return;
        }
    };
    let Some(surface) = Canvas2dSurface::new(canvas.clone()) else {
        log::warn!("2d context unavailable; constellation disabled");
        return;
    };

    let (width, height) = dom::viewport_size();
    surface.set_size(width as u32, height as u32);

    let sim = Constellation::new(
        ConstellationConfig::default(),
        Vec2::new(width as f32, height as f32),
        js_sys::Date::now() as u64,
    );

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(Runner {
            sim,
            draw_list: DrawList::new(),
            input: InputQueue::new(),
            timestep: FixedTimestep::new(STEP_DT),
            surface,
        });
    });

    attach_listeners(&canvas);
    spawn_frame_loop();
}

fn attach_listeners(canvas: &HtmlCanvasElement) {
    dom::on_mouse_event(canvas, "mousemove", |e| {
        push_input(InputEvent::PointerMove {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        });
    });
    dom::on_mouse_event(canvas, "mouseleave", |_| {
        push_input(InputEvent::PointerLeave);
    });
    dom::on_window_event("resize", || {
        let (width, height) = dom::viewport_size();
        push_input(InputEvent::Resize {
            width: width as f32,
            height: height as f32,
        });
    });
}

fn spawn_frame_loop() {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let starter = handle.clone();
    let last_ms = Rc::new(Cell::new(None::<f64>));

    *starter.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let dt = match last_ms.get() {
            Some(prev) => ((now_ms - prev) / 1000.0) as f32,
            None => STEP_DT,
        };
        last_ms.set(Some(now_ms));

        RUNNER.with(|cell| {
            if let Some(runner) = cell.borrow_mut().as_mut() {
                runner.frame(dt);
            }
        });

        let _ = dom::window().request_animation_frame(
            handle.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        );
    }));

    let _ = dom::window().request_animation_frame(
        starter.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
    );
}

impl Runner {
    fn frame(&mut self, dt: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } => self.sim.set_pointer(Vec2::new(x, y)),
                InputEvent::PointerLeave => self.sim.clear_pointer(),
                InputEvent::Resize { width, height } => {
                    self.surface.set_size(width as u32, height as u32);
                    self.sim.resize(Vec2::new(width, height));
                }
            }
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.step();
        }

        let theme = ui::theme::current();
        self.draw_list.clear();
        self.sim.render(&mut self.draw_list, theme);
        self.sim.connect_pointer(&mut self.draw_list, theme);
        self.draw_list.replay(&mut self.surface);
    }
}
