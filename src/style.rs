// CSS text for layers and circles. Pure string building so the host tests can
// include this file directly.

use glam::Vec2;
use parallax_core::{ProjectedLayer, RenderConfig, CIRCLE_BASE_SIZE_PX, PERSPECTIVE_PX};

pub const CIRCLE_BORDER_PX: u32 = 4;
pub const CIRCLE_GLOW_PX: u32 = 20;

/// Per-tick transform. The x-rotation value is applied about Y, matching the
/// look the effect has always had.
#[inline]
pub fn layer_transform(layer: &ProjectedLayer) -> String {
    format!(
        "translateZ({:.2}px) translate({:.2}px, {:.2}px) rotateY({:.2}deg) rotateZ({:.2}deg)",
        layer.depth, layer.translate_x, layer.translate_y, layer.rotate_x_deg, layer.rotate_z_deg
    )
}

#[inline]
pub fn blur_filter(blur_px: f32) -> String {
    format!("blur({:.2}px)", blur_px)
}

#[inline]
pub fn z_index(layer: &ProjectedLayer) -> String {
    layer.z_order.to_string()
}

#[inline]
pub fn root_perspective() -> String {
    format!("{}px", PERSPECTIVE_PX)
}

/// Static layer container: fills the root and centers its circle.
pub fn layer_css() -> &'static str {
    "position:absolute;width:100%;height:100%;display:flex;justify-content:center;align-items:center;will-change:transform;transform-style:preserve-3d"
}

pub fn circle_size_px(circle_size_scale: f32) -> f32 {
    circle_size_scale * CIRCLE_BASE_SIZE_PX
}

#[inline]
pub fn circle_offset_transform(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

pub fn circle_css(border_color: &str, glow_color: &str, circle_size_scale: f32, offset: Vec2) -> String {
    let size = circle_size_px(circle_size_scale);
    format!(
        "border-radius:9999px;border:{}px solid {};background:#000;width:{:.2}px;height:{:.2}px;box-shadow:0px 0px {}px {};transform:{}",
        CIRCLE_BORDER_PX,
        border_color,
        size,
        size,
        CIRCLE_GLOW_PX,
        glow_color,
        circle_offset_transform(offset)
    )
}

/// One-line summary of the live settings for the hint overlay.
pub fn hint_text(num_layers: usize, config: &RenderConfig) -> String {
    format!(
        "Layers: {} • Blur: {:.2} • Size: {:.2} • Easing: {:.3} • Model: {}",
        num_layers,
        config.blur_scale,
        config.circle_size_scale,
        config.easing_factor,
        config.motion_model.name()
    )
}
