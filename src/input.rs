use parallax_core::{clamp_layer_count, ConfigPatch, RenderConfig, BLUR_SCALE_MAX, CIRCLE_SIZE_SCALE_MAX};

// Keyboard step sizes
pub const LAYER_COUNT_STEP: usize = 5;
pub const BLUR_STEP: f32 = 0.25;
pub const CIRCLE_SIZE_STEP: f32 = 0.25;
pub const EASING_STEP: f32 = 0.001;
pub const EASING_UI_MAX: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    MoreLayers,
    FewerLayers,
    BlurUp,
    BlurDown,
    SizeUp,
    SizeDown,
    EasingUp,
    EasingDown,
    ToggleModel,
    Reseed,
    ToggleHint,
}

/// What a control asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEffect {
    /// Re-initialize with this many layers (fresh per-layer randomness).
    Relayout(usize),
    Reconfigure(ConfigPatch),
    ToggleHint,
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "+" | "=" => Some(Control::MoreLayers),
        "-" | "_" => Some(Control::FewerLayers),
        "]" => Some(Control::BlurUp),
        "[" => Some(Control::BlurDown),
        "." => Some(Control::SizeUp),
        "," => Some(Control::SizeDown),
        "'" => Some(Control::EasingUp),
        ";" => Some(Control::EasingDown),
        "m" | "M" => Some(Control::ToggleModel),
        "r" | "R" => Some(Control::Reseed),
        "h" | "H" => Some(Control::ToggleHint),
        _ => None,
    }
}

pub fn apply_control(control: Control, num_layers: usize, config: &RenderConfig) -> ControlEffect {
    let step = |v: f32, d: f32, max: f32| (v + d).clamp(0.0, max);
    match control {
        Control::MoreLayers => {
            ControlEffect::Relayout(clamp_layer_count(num_layers.saturating_add(LAYER_COUNT_STEP)))
        }
        Control::FewerLayers => {
            ControlEffect::Relayout(clamp_layer_count(num_layers.saturating_sub(LAYER_COUNT_STEP)))
        }
        Control::Reseed => ControlEffect::Relayout(num_layers),
        Control::BlurUp | Control::BlurDown => {
            let d = if control == Control::BlurUp { BLUR_STEP } else { -BLUR_STEP };
            ControlEffect::Reconfigure(ConfigPatch {
                blur_scale: Some(step(config.blur_scale, d, BLUR_SCALE_MAX)),
                ..ConfigPatch::default()
            })
        }
        Control::SizeUp | Control::SizeDown => {
            let d = if control == Control::SizeUp {
                CIRCLE_SIZE_STEP
            } else {
                -CIRCLE_SIZE_STEP
            };
            ControlEffect::Reconfigure(ConfigPatch {
                circle_size_scale: Some(step(config.circle_size_scale, d, CIRCLE_SIZE_SCALE_MAX)),
                ..ConfigPatch::default()
            })
        }
        Control::EasingUp | Control::EasingDown => {
            let d = if control == Control::EasingUp {
                EASING_STEP
            } else {
                -EASING_STEP
            };
            ControlEffect::Reconfigure(ConfigPatch {
                easing_factor: Some(step(config.easing_factor, d, EASING_UI_MAX)),
                ..ConfigPatch::default()
            })
        }
        Control::ToggleModel => ControlEffect::Reconfigure(ConfigPatch {
            motion_model: Some(config.motion_model.toggled()),
            ..ConfigPatch::default()
        }),
        Control::ToggleHint => ControlEffect::ToggleHint,
    }
}
