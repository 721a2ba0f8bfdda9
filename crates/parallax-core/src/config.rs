use crate::constants::*;

/// Which integration model the motion smoother runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionModel {
    /// Velocity-carrying spring: acceleration toward target, friction on velocity.
    #[default]
    Damped,
    /// Legacy behavior: fixed-fraction ease toward target, no velocity.
    QuadraticEase,
}

impl MotionModel {
    pub fn toggled(self) -> Self {
        match self {
            MotionModel::Damped => MotionModel::QuadraticEase,
            MotionModel::QuadraticEase => MotionModel::Damped,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MotionModel::Damped => "damped",
            MotionModel::QuadraticEase => "quadratic",
        }
    }
}

/// Render parameters injected by the host. The engine never reads storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub easing_factor: f32,
    pub friction: f32,
    pub blur_scale: f32,
    pub circle_size_scale: f32,
    pub motion_model: MotionModel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            easing_factor: DEFAULT_EASING_FACTOR,
            friction: DEFAULT_FRICTION,
            blur_scale: DEFAULT_BLUR_SCALE,
            circle_size_scale: DEFAULT_CIRCLE_SIZE_SCALE,
            motion_model: MotionModel::Damped,
        }
    }
}

impl RenderConfig {
    /// Clamp every field into its renderable range.
    ///
    /// Non-finite values fall back to the default for that field.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            easing_factor: clamp_or(self.easing_factor, 0.0, EASING_FACTOR_MAX, d.easing_factor),
            friction: clamp_or(self.friction, 0.0, FRICTION_MAX, d.friction),
            blur_scale: clamp_or(self.blur_scale, 0.0, BLUR_SCALE_MAX, d.blur_scale),
            circle_size_scale: clamp_or(
                self.circle_size_scale,
                0.0,
                CIRCLE_SIZE_SCALE_MAX,
                d.circle_size_scale,
            ),
            motion_model: self.motion_model,
        }
    }

    /// Overlay the fields present in `patch`. The result is not sanitized.
    pub fn merged(self, patch: &ConfigPatch) -> Self {
        Self {
            easing_factor: patch.easing_factor.unwrap_or(self.easing_factor),
            friction: patch.friction.unwrap_or(self.friction),
            blur_scale: patch.blur_scale.unwrap_or(self.blur_scale),
            circle_size_scale: patch.circle_size_scale.unwrap_or(self.circle_size_scale),
            motion_model: patch.motion_model.unwrap_or(self.motion_model),
        }
    }
}

/// Partial configuration update; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    pub easing_factor: Option<f32>,
    pub friction: Option<f32>,
    pub blur_scale: Option<f32>,
    pub circle_size_scale: Option<f32>,
    pub motion_model: Option<MotionModel>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Clamp a requested layer count into `MIN_LAYERS..=MAX_LAYERS`.
#[inline]
pub fn clamp_layer_count(n: usize) -> usize {
    n.clamp(MIN_LAYERS, MAX_LAYERS)
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        fallback
    }
}
