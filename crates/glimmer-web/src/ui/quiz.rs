//! Quiz DOM wiring. The `Quiz` state machine decides; this module paints.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use glimmer_engine::{ContentManifest, Quiz, QuizPhase};

use crate::dom;
use crate::ui::burst;

const FEEDBACK_MS: u32 = 1500;

thread_local! {
    static QUIZ: RefCell<Option<Quiz>> = const { RefCell::new(None) };
}

fn with_quiz<R>(f: impl FnOnce(&mut Quiz) -> R) -> Option<R> {
    QUIZ.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub fn init(manifest: &ContentManifest) {
    let start_btn = dom::element("quizStart");
    let restart_btn = dom::element("quizRestart");
    if start_btn.is_none() && restart_btn.is_none() {
        log::warn!("quiz controls not found; quiz disabled");
        return;
    }

    QUIZ.with(|cell| {
        *cell.borrow_mut() = Some(Quiz::new(manifest.quiz.clone()));
    });

    if let Some(btn) = start_btn {
        dom::on_click(&btn, || {
            with_quiz(|quiz| quiz.start());
            render();
        });
    }
    if let Some(btn) = restart_btn {
        dom::on_click(&btn, || {
            with_quiz(|quiz| quiz.start());
            render();
        });
    }
}

fn render() {
    let Some(phase) = with_quiz(|quiz| quiz.phase()) else {
        return;
    };
    let welcome = dom::element("quizWelcome");
    let question = dom::element("quizQuestion");
    let result = dom::element("quizResult");
    let (Some(welcome), Some(question), Some(result)) = (welcome, question, result) else {
        return;
    };

    match phase {
        QuizPhase::Welcome => {
            dom::remove_class(&welcome, "quiz-hidden");
            dom::add_class(&question, "quiz-hidden");
            dom::add_class(&result, "quiz-hidden");
        }
        QuizPhase::Question { index } => {
            dom::add_class(&welcome, "quiz-hidden");
            dom::add_class(&result, "quiz-hidden");
            dom::remove_class(&question, "quiz-hidden");
            render_question(index);
        }
        QuizPhase::Feedback { .. } => {
            // Painted in place by on_pick; nothing to rebuild.
        }
        QuizPhase::Result => {
            dom::add_class(&welcome, "quiz-hidden");
            dom::add_class(&question, "quiz-hidden");
            dom::remove_class(&result, "quiz-hidden");
            if let Some(score_el) = dom::element("quizScore") {
                if let Some(message) = with_quiz(|quiz| quiz.result_message()) {
                    dom::set_text(&score_el, &message);
                }
            }
        }
    }
}

fn render_question(index: usize) {
    let Some(text_el) = dom::element("questionText") else {
        return;
    };
    let Some(options_el) = dom::element("quizOptions") else {
        return;
    };

    let Some(Some((prompt, options, number))) = with_quiz(|quiz| {
        quiz.question(index)
            .map(|q| (q.prompt.clone(), q.options.clone(), index + 1))
    }) else {
        return;
    };

    dom::set_text(&text_el, &format!("Pregunta {number}: {prompt}"));

    options_el.set_inner_html("");
    for (opt_index, option) in options.iter().enumerate() {
        let Ok(button) = dom::document().create_element("button") else {
            continue;
        };
        button.set_class_name("quiz-option");
        dom::set_text(&button, option);
        dom::on_click(&button, move || on_pick(opt_index));
        let _ = options_el.append_child(&button);
    }
}

fn on_pick(picked: usize) {
    let Some(Some(outcome)) = with_quiz(|quiz| quiz.answer(picked)) else {
        return;
    };

    let options = dom::query_all("#quizOptions .quiz-option");
    for option in &options {
        lock_option(option);
    }
    if let Some(picked_el) = options.get(picked) {
        dom::add_class(
            picked_el,
            if outcome.correct { "correct" } else { "incorrect" },
        );
    }
    if !outcome.correct {
        if let Some(correct_el) = options.get(outcome.correct_index) {
            dom::add_class(correct_el, "correct");
        }
    }

    if outcome.correct {
        burst::mini_confetti();
    }

    Timeout::new(FEEDBACK_MS, || {
        with_quiz(|quiz| quiz.advance());
        render();
    })
    .forget();
}

fn lock_option(option: &Element) {
    if let Some(html) = option.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("pointer-events", "none");
    }
}
