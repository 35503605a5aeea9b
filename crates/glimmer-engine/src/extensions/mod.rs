// extensions/mod.rs
//
// Page-feature state machines, decoupled from the constellation core.
// Each one is pure: the wasm bridge owns the DOM and the timers, these own
// the state and the decisions.

pub mod burst;
pub mod letter;
pub mod memory;
pub mod quiz;
pub mod scroll;

pub use letter::{Typewriter, TypewriterTick};
pub use memory::MemoryBoard;
pub use quiz::{AnswerOutcome, Quiz, QuizPhase};
pub use scroll::{NavbarState, NavbarVisibility, ScrollDirection};
