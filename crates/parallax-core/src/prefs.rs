//! User preferences codec.
//!
//! Storage itself belongs to the host; this only maps between typed values
//! and the string key/value pairs a browser-style store holds.

use crate::config::{clamp_layer_count, RenderConfig};
use crate::constants::DEFAULT_NUM_LAYERS;

pub const PREF_NUM_LAYERS: &str = "parallax.numLayers";
pub const PREF_EASING_FACTOR: &str = "parallax.easingFactor";
pub const PREF_BLUR_SCALE: &str = "parallax.blurScale";
pub const PREF_CIRCLE_SIZE_SCALE: &str = "parallax.circleSize";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
    pub num_layers: usize,
    pub easing_factor: f32,
    pub blur_scale: f32,
    pub circle_size_scale: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        let c = RenderConfig::default();
        Self {
            num_layers: DEFAULT_NUM_LAYERS,
            easing_factor: c.easing_factor,
            blur_scale: c.blur_scale,
            circle_size_scale: c.circle_size_scale,
        }
    }
}

impl Preferences {
    /// Read preferences through `lookup`; absent or malformed entries keep
    /// their defaults and every value is clamped into range.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let num = |key: &str, fallback: f32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .unwrap_or(fallback)
        };
        let num_layers = lookup(PREF_NUM_LAYERS)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(clamp_layer_count)
            .unwrap_or(d.num_layers);
        let config = RenderConfig {
            easing_factor: num(PREF_EASING_FACTOR, d.easing_factor),
            blur_scale: num(PREF_BLUR_SCALE, d.blur_scale),
            circle_size_scale: num(PREF_CIRCLE_SIZE_SCALE, d.circle_size_scale),
            ..RenderConfig::default()
        }
        .sanitized();
        Self {
            num_layers,
            easing_factor: config.easing_factor,
            blur_scale: config.blur_scale,
            circle_size_scale: config.circle_size_scale,
        }
    }

    /// Key/value pairs to persist.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            (PREF_NUM_LAYERS, self.num_layers.to_string()),
            (PREF_EASING_FACTOR, self.easing_factor.to_string()),
            (PREF_BLUR_SCALE, self.blur_scale.to_string()),
            (PREF_CIRCLE_SIZE_SCALE, self.circle_size_scale.to_string()),
        ]
    }

    /// Apply the persisted fields on top of `base` (friction and model are
    /// not persisted).
    pub fn render_config(&self, base: RenderConfig) -> RenderConfig {
        RenderConfig {
            easing_factor: self.easing_factor,
            blur_scale: self.blur_scale,
            circle_size_scale: self.circle_size_scale,
            ..base
        }
    }

    pub fn capture(num_layers: usize, config: &RenderConfig) -> Self {
        Self {
            num_layers,
            easing_factor: config.easing_factor,
            blur_scale: config.blur_scale,
            circle_size_scale: config.circle_size_scale,
        }
    }
}
