//! Scroll-derived UI state: reading progress, navbar visibility, and the
//! scroll-to-top button. The bridge feeds in raw scroll offsets and applies
//! the resulting classes/styles.

/// Navbar appears after this much scroll.
pub const NAVBAR_REVEAL_PX: f64 = 200.0;
/// Extra scroll past the reveal point before hide-on-scroll-down kicks in.
pub const NAVBAR_HIDE_HYSTERESIS_PX: f64 = 100.0;
/// Scroll-to-top button appears after this much scroll.
pub const SCROLL_TOP_REVEAL_PX: f64 = 500.0;

/// Reading progress in percent, clamped to 0..=100.
/// A document shorter than the viewport reads as fully read.
pub fn reading_progress(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 100.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether the scroll-to-top button should be visible.
pub fn scroll_top_visible(scroll_top: f64) -> bool {
    scroll_top > SCROLL_TOP_REVEAL_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What the navbar should look like after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarVisibility {
    /// Whether the bar is shown at all.
    pub visible: bool,
    /// Direction hint for the slide animation; None near the top.
    pub direction: Option<ScrollDirection>,
}

/// Tracks the previous scroll offset to derive direction.
pub struct NavbarState {
    last_scroll_top: f64,
}

impl NavbarState {
    pub fn new() -> Self {
        Self {
            last_scroll_top: 0.0,
        }
    }

    /// Feed the current scroll offset; returns the desired navbar state.
    /// Hidden near the top; once revealed, it slides away on downward
    /// scrolls past the hysteresis band and back on upward scrolls.
    pub fn update(&mut self, scroll_top: f64) -> NavbarVisibility {
        let result = if scroll_top > NAVBAR_REVEAL_PX {
            let direction = if scroll_top > self.last_scroll_top
                && scroll_top > NAVBAR_REVEAL_PX + NAVBAR_HIDE_HYSTERESIS_PX
            {
                Some(ScrollDirection::Down)
            } else {
                Some(ScrollDirection::Up)
            };
            NavbarVisibility {
                visible: true,
                direction,
            }
        } else {
            NavbarVisibility {
                visible: false,
                direction: None,
            }
        };
        self.last_scroll_top = scroll_top;
        result
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(reading_progress(0.0, 800.0, 2000.0), 0.0);
        assert_eq!(reading_progress(1200.0, 800.0, 2000.0), 100.0);
        assert_eq!(reading_progress(5000.0, 800.0, 2000.0), 100.0);
        assert_eq!(reading_progress(-10.0, 800.0, 2000.0), 0.0);
    }

    #[test]
    fn progress_is_linear_in_between() {
        let p = reading_progress(600.0, 800.0, 2000.0);
        assert!((p - 50.0).abs() < 1e-9);
    }

    #[test]
    fn short_document_reads_as_done() {
        assert_eq!(reading_progress(0.0, 800.0, 600.0), 100.0);
        assert_eq!(reading_progress(0.0, 800.0, 800.0), 100.0);
    }

    #[test]
    fn navbar_hidden_near_top() {
        let mut nav = NavbarState::new();
        let v = nav.update(150.0);
        assert!(!v.visible);
        assert_eq!(v.direction, None);
    }

    #[test]
    fn navbar_shows_after_threshold() {
        let mut nav = NavbarState::new();
        let v = nav.update(250.0);
        assert!(v.visible);
        assert_eq!(v.direction, Some(ScrollDirection::Up));
    }

    #[test]
    fn navbar_hides_on_deep_downward_scroll() {
        let mut nav = NavbarState::new();
        nav.update(250.0);
        let v = nav.update(400.0); // scrolling down, past hysteresis
        assert_eq!(v.direction, Some(ScrollDirection::Down));
    }

    #[test]
    fn navbar_returns_on_upward_scroll() {
        let mut nav = NavbarState::new();
        nav.update(250.0);
        nav.update(400.0);
        let v = nav.update(350.0); // back up
        assert_eq!(v.direction, Some(ScrollDirection::Up));
    }

    #[test]
    fn downward_scroll_inside_hysteresis_stays_up() {
        let mut nav = NavbarState::new();
        nav.update(210.0);
        let v = nav.update(250.0); // down, but within the band
        assert_eq!(v.direction, Some(ScrollDirection::Up));
    }

    #[test]
    fn scroll_top_button_threshold() {
        assert!(!scroll_top_visible(400.0));
        assert!(scroll_top_visible(501.0));
    }
}
