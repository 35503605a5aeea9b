//! Surface trait for host rendering backends.
//!
//! The engine never draws; it fills a `DrawList` and the host replays it
//! onto whatever it renders with. The shipped backend is Canvas2D in the
//! wasm bridge; a test backend just records calls.

use super::instance::{DiscInstance, LineInstance};

/// A 2D drawable surface with viewport-sized pixel dimensions.
///
/// Implementors provide a clear pass, a filled circle, and a stroked line
/// segment — the only primitives the page needs.
pub trait Surface {
    /// Erase the whole surface before a frame is replayed.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_disc(&mut self, disc: &DiscInstance);

    /// Draw a stroked line segment.
    fn stroke_line(&mut self, line: &LineInstance);
}
