pub mod core;
pub mod constellation;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use crate::core::rng::Rng;
pub use crate::core::theme::{Palette, Rgb, Theme, THEME_STORAGE_KEY};
pub use crate::core::time::FixedTimestep;
pub use constellation::particle::Particle;
pub use constellation::{Constellation, ConstellationConfig};
pub use renderer::instance::{DiscInstance, DrawList, LineInstance};
pub use renderer::surface::Surface;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{ContentManifest, MemoryCardContent, QuizQuestion};

// Extensions — decoupled page-feature state machines
pub use extensions::{
    AnswerOutcome, MemoryBoard, NavbarState, NavbarVisibility, Quiz, QuizPhase, ScrollDirection,
    Typewriter, TypewriterTick,
};
