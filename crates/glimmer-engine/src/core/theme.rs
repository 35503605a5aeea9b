//! Dark/light theme state and color palettes.
//!
//! The active theme is external UI state: the host reads it from persistent
//! storage at startup, flips it from the toggle button, and passes it into
//! every render call. Dark is the default when nothing is saved.

/// localStorage key the host persists the preference under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// An opaque RGB triple, formatted into CSS with a computed alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Per-theme drawing constants for the constellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Particle disc color.
    pub particle: Rgb,
    /// Particle disc opacity.
    pub particle_alpha: f32,
    /// Constellation line color (pair and pointer lines share the RGB).
    pub link: Rgb,
    /// Max opacity factor for particle-to-particle lines.
    pub link_alpha: f32,
    /// Max opacity factor for particle-to-pointer lines.
    pub pointer_link_alpha: f32,
}

/// Binary color scheme for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a saved preference string. Anything other than an explicit
    /// "light" falls back to dark, including absence and garbage values.
    pub fn resolve(saved: Option<&str>) -> Self {
        match saved {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The string persisted to storage for this theme.
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                particle: Rgb::new(212, 165, 216),
                particle_alpha: 0.8,
                link: Rgb::new(212, 165, 216),
                link_alpha: 0.5,
                pointer_link_alpha: 0.8,
            },
            Theme::Light => Palette {
                particle: Rgb::new(255, 107, 157),
                particle_alpha: 0.6,
                link: Rgb::new(255, 107, 157),
                link_alpha: 0.5,
                pointer_link_alpha: 0.8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_dark() {
        assert_eq!(Theme::resolve(None), Theme::Dark);
        assert_eq!(Theme::resolve(Some("dark")), Theme::Dark);
        assert_eq!(Theme::resolve(Some("purple")), Theme::Dark);
    }

    #[test]
    fn resolve_honors_explicit_light() {
        assert_eq!(Theme::resolve(Some("light")), Theme::Light);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn storage_value_round_trips_through_resolve() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::resolve(Some(theme.storage_value())), theme);
        }
    }

    #[test]
    fn palettes_differ_only_in_rgb() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.particle, light.particle);
        assert_eq!(dark.link_alpha, light.link_alpha);
        assert_eq!(dark.pointer_link_alpha, light.pointer_link_alpha);
    }
}
