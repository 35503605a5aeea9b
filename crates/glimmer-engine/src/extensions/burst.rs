//! Placement math for the decorative emoji effects: radial bursts, falling
//! confetti, floating hearts, and petals.
//!
//! All randomness comes through the injected rng, so every spawn is
//! reproducible in tests. The bridge turns these records into absolutely
//! positioned DOM elements and CSS animations.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::core::rng::Rng;

pub const HEART_CONFETTI_EMOJIS: &[&str] = &["💖", "💗", "✨", "💫", "🌸"];
pub const SPARKLE_EMOJIS: &[&str] = &["✨", "⭐", "💫", "🌟"];
pub const CARD_SPARKLE_EMOJIS: &[&str] = &["✨", "⭐", "💫"];
pub const FLOATING_HEART_EMOJIS: &[&str] = &["💕", "💖", "💗", "💝", "💘", "💞"];
pub const PETAL_EMOJIS: &[&str] = &["🌸", "🌺", "🌷", "💮", "🏵️"];
pub const COMPLETION_EMOJIS: &[&str] = &["💖", "💗", "💕", "🌸", "✨", "💫"];
pub const MINI_CONFETTI_EMOJIS: &[&str] = &["💖", "✨", "🌸"];

/// Pick a random emoji from a palette.
pub fn pick<'a>(palette: &[&'a str], rng: &mut Rng) -> &'a str {
    palette[rng.next_int(palette.len() as u32) as usize]
}

/// One spark of a radial burst, offset from the burst origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstSpark {
    pub emoji: &'static str,
    pub offset: Vec2,
    pub duration_s: f32,
}

/// Distribute `count` sparks evenly around a circle, each flung a random
/// distance in `[min_dist, min_dist + spread)`.
pub fn ring(
    palette: &'static [&'static str],
    count: usize,
    min_dist: f32,
    spread: f32,
    rng: &mut Rng,
) -> Vec<BurstSpark> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let dist = min_dist + rng.next_f32() * spread;
            BurstSpark {
                emoji: pick(palette, rng),
                offset: Vec2::new(angle.cos() * dist, angle.sin() * dist),
                duration_s: 1.0 + rng.next_f32() * 0.5,
            }
        })
        .collect()
}

/// One piece of falling confetti, spawned above the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingPiece {
    pub emoji: &'static str,
    /// Horizontal start, percent of viewport width.
    pub left_pct: f32,
    pub duration_s: f32,
    /// Horizontal drift over the fall, in px.
    pub drift_px: f32,
    pub font_size_rem: f32,
}

/// Spawn `count` falling pieces with 3–5 s falls and ±100 px drift.
pub fn confetti_rain(
    palette: &'static [&'static str],
    count: usize,
    rng: &mut Rng,
) -> Vec<FallingPiece> {
    (0..count)
        .map(|_| FallingPiece {
            emoji: pick(palette, rng),
            left_pct: rng.next_f32() * 100.0,
            duration_s: 3.0 + rng.next_f32() * 2.0,
            drift_px: (rng.next_f32() - 0.5) * 200.0,
            font_size_rem: 1.0 + rng.next_f32(),
        })
        .collect()
}

/// A background floating heart's CSS animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub emoji: &'static str,
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub drift_px: f32,
    pub rotation_deg: f32,
}

/// Spawn the ambient floating hearts: 15–25 s drifts with staggered starts.
pub fn floating_hearts(count: usize, rng: &mut Rng) -> Vec<FloatingHeart> {
    (0..count)
        .map(|_| FloatingHeart {
            emoji: pick(FLOATING_HEART_EMOJIS, rng),
            left_pct: rng.next_f32() * 100.0,
            duration_s: 15.0 + rng.next_f32() * 10.0,
            delay_s: rng.next_f32() * 5.0,
            drift_px: (rng.next_f32() - 0.5) * 150.0,
            rotation_deg: rng.next_f32() * 360.0,
        })
        .collect()
}

/// A petal drifting down inside the letter modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub emoji: &'static str,
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub drift_px: f32,
}

/// Spawn `count` petals with 8–12 s falls.
pub fn petals(count: usize, rng: &mut Rng) -> Vec<Petal> {
    (0..count)
        .map(|_| Petal {
            emoji: pick(PETAL_EMOJIS, rng),
            left_pct: rng.next_f32() * 100.0,
            duration_s: 8.0 + rng.next_f32() * 4.0,
            delay_s: rng.next_f32() * 3.0,
            drift_px: (rng.next_f32() - 0.5) * 200.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_distributes_angles_evenly() {
        let mut rng = Rng::new(42);
        let sparks = ring(HEART_CONFETTI_EMOJIS, 6, 100.0, 50.0, &mut rng);
        assert_eq!(sparks.len(), 6);
        for (i, spark) in sparks.iter().enumerate() {
            let angle = TAU * i as f32 / 6.0;
            let dist = spark.offset.length();
            assert!((100.0..150.0).contains(&dist), "dist {}", dist);
            // Direction matches the assigned slot.
            let expected = Vec2::new(angle.cos(), angle.sin());
            assert!((spark.offset.normalize() - expected).length() < 1e-4);
        }
    }

    #[test]
    fn ring_is_deterministic_for_a_seed() {
        let a = ring(CARD_SPARKLE_EMOJIS, 5, 60.0, 40.0, &mut Rng::new(9));
        let b = ring(CARD_SPARKLE_EMOJIS, 5, 60.0, 40.0, &mut Rng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn confetti_rain_fields_stay_in_range() {
        let mut rng = Rng::new(7);
        for piece in confetti_rain(COMPLETION_EMOJIS, 30, &mut rng) {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((3.0..5.0).contains(&piece.duration_s));
            assert!(piece.drift_px.abs() <= 100.0);
            assert!((1.0..2.0).contains(&piece.font_size_rem));
        }
    }

    #[test]
    fn floating_hearts_fields_stay_in_range() {
        let mut rng = Rng::new(3);
        let hearts = floating_hearts(8, &mut rng);
        assert_eq!(hearts.len(), 8);
        for h in hearts {
            assert!((15.0..25.0).contains(&h.duration_s));
            assert!((0.0..5.0).contains(&h.delay_s));
            assert!(h.drift_px.abs() <= 75.0);
            assert!((0.0..360.0).contains(&h.rotation_deg));
            assert!(FLOATING_HEART_EMOJIS.contains(&h.emoji));
        }
    }

    #[test]
    fn petals_fields_stay_in_range() {
        let mut rng = Rng::new(11);
        for p in petals(20, &mut rng) {
            assert!((8.0..12.0).contains(&p.duration_s));
            assert!((0.0..3.0).contains(&p.delay_s));
            assert!(p.drift_px.abs() <= 100.0);
            assert!(PETAL_EMOJIS.contains(&p.emoji));
        }
    }

    #[test]
    fn pick_only_returns_palette_members() {
        let mut rng = Rng::new(5);
        for _ in 0..100 {
            assert!(SPARKLE_EMOJIS.contains(&pick(SPARKLE_EMOJIS, &mut rng)));
        }
    }
}
