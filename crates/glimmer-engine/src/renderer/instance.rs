use bytemuck::{Pod, Zeroable};

/// A filled circle to be drawn by the host surface.
/// Color channels are 0–255 (CSS range), stored as f32 for a uniform layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DiscInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl DiscInstance {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A stroked line segment to be drawn by the host surface.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Frame-local draw command buffer.
/// The simulation writes discs and lines here; a host surface replays them.
/// Rebuilt from scratch every frame.
pub struct DrawList {
    pub discs: Vec<DiscInstance>,
    pub lines: Vec<LineInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            discs: Vec::with_capacity(128),
            lines: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.discs.clear();
        self.lines.clear();
    }

    pub fn push_disc(&mut self, disc: DiscInstance) {
        self.discs.push(disc);
    }

    pub fn push_line(&mut self, line: LineInstance) {
        self.lines.push(line);
    }

    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replay the buffered commands onto a surface: clear, discs, then lines.
    pub fn replay<S: super::surface::Surface>(&self, surface: &mut S) {
        surface.clear();
        for disc in &self.discs {
            surface.fill_disc(disc);
        }
        for line in &self.lines {
            surface.stroke_line(line);
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_instance_is_7_floats() {
        assert_eq!(std::mem::size_of::<DiscInstance>(), 28);
        assert_eq!(DiscInstance::FLOATS, 7);
    }

    #[test]
    fn line_instance_is_9_floats() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 36);
        assert_eq!(LineInstance::FLOATS, 9);
    }

    #[test]
    fn draw_list_push_and_clear() {
        let mut list = DrawList::new();
        list.push_disc(DiscInstance::default());
        list.push_line(LineInstance::default());
        list.push_line(LineInstance::default());
        assert_eq!(list.disc_count(), 1);
        assert_eq!(list.line_count(), 2);

        list.clear();
        assert_eq!(list.disc_count(), 0);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn replay_visits_every_command_in_order() {
        struct Recorder {
            calls: Vec<&'static str>,
        }
        impl crate::renderer::surface::Surface for Recorder {
            fn clear(&mut self) {
                self.calls.push("clear");
            }
            fn fill_disc(&mut self, _disc: &DiscInstance) {
                self.calls.push("disc");
            }
            fn stroke_line(&mut self, _line: &LineInstance) {
                self.calls.push("line");
            }
        }

        let mut list = DrawList::new();
        list.push_disc(DiscInstance::default());
        list.push_line(LineInstance::default());

        let mut rec = Recorder { calls: Vec::new() };
        list.replay(&mut rec);
        assert_eq!(rec.calls, vec!["clear", "disc", "line"]);
    }
}
