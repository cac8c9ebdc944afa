// extensions/easing.rs
//
// Easing curves for the entrance tween.
// Pure math, no scene access. Names follow the usual quad/cubic/sine
// families; QuadOut is what GSAP calls "power1.out", its default.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    QuadIn,
    /// Slow end. Default for the entrance tween.
    #[default]
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineInOut,
    ExpoOut,
    /// Overshoot then settle.
    BackOut,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to eased progress.
    /// `BackOut` overshoots past 1.0 before settling.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
        Easing::ExpoOut,
        Easing::BackOut,
    ];

    #[test]
    fn every_curve_hits_both_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", easing);
        }
    }

    #[test]
    fn quad_out_front_loads_progress() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!((mid - 0.75).abs() < 1e-6, "got {}", mid);
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn back_out_overshoots() {
        assert!(Easing::BackOut.apply(0.6) > 1.0);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Easing::QuadOut).unwrap();
        assert_eq!(json, "\"quad_out\"");
        let back: Easing = serde_json::from_str("\"sine_in_out\"").unwrap();
        assert_eq!(back, Easing::SineInOut);
    }

    #[test]
    fn ease_interpolates() {
        assert!((ease(0.0, 10.0, 0.5, Easing::Linear) - 5.0).abs() < 1e-6);
    }
}
