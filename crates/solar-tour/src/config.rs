use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extensions::easing::Easing;

/// Logical width below which a body uses its mobile camera distance.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Fixed supersampling factor of the drawing surface.
pub const PIXEL_RATIO: f32 = 2.0;

/// Typeface used for body labels (three.js typeface JSON).
pub const DEFAULT_FONT_PATH: &str =
    "https://threejs.org/examples/fonts/helvetiker_regular.typeface.json";

/// Tour-wide settings, shared by every mounted scene.
///
/// Defaults reproduce the original site; the page shell may override
/// any subset through `TourConfig::from_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Drawing-surface pixels per logical pixel.
    pub pixel_ratio: f32,
    /// Widths strictly below this use the mobile camera distance.
    pub mobile_breakpoint: f32,
    /// Length of the entrance scale-up, in seconds.
    pub entrance_duration: f32,
    pub entrance_easing: Easing,
    /// Upper bound on the per-frame delta fed to tweens and controls, in seconds.
    pub max_frame_dt: f32,
    pub font_path: String,
    /// Prefix for relative texture/model paths (absolute URLs are left alone).
    pub asset_root: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            pixel_ratio: PIXEL_RATIO,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            entrance_duration: 1.0,
            entrance_easing: Easing::QuadOut,
            max_frame_dt: 0.1,
            font_path: DEFAULT_FONT_PATH.to_string(),
            asset_root: String::new(),
        }
    }
}

impl TourConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pixel_ratio > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pixel_ratio must be positive, got {}",
                self.pixel_ratio
            )));
        }
        if self.entrance_duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "entrance_duration must not be negative, got {}",
                self.entrance_duration
            )));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        Ok(())
    }

    /// Resolve an asset path against `asset_root`.
    pub fn resolve_path(&self, path: &str) -> String {
        let absolute = path.starts_with("http://") || path.starts_with("https://");
        if absolute || self.asset_root.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.asset_root.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
