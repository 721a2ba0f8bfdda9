//! Per-layer depth projection.
//!
//! Depth is linear in the layer index and centered on the middle of the
//! stack, so both ends of the stack move and blur the most while the middle
//! layer stays still and sharp.

use crate::constants::*;
use crate::error::PresentError;
use crate::registry::LayerDescriptor;
use glam::Vec2;

/// Visual attributes for one layer, recomputed every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedLayer {
    pub index: usize,
    pub depth: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_x_deg: f32,
    /// Driven by the horizontal position; rendered as a rotation about Z.
    pub rotate_z_deg: f32,
    pub blur_px: f32,
    pub z_order: i32,
}

/// Signed distance of a layer from the virtual camera plane.
///
/// The stack is centered on layer `total / 2` (integer half), which sits
/// exactly at depth zero.
#[inline]
pub fn layer_depth(index: usize, total_layers: usize) -> f32 {
    -(index as f32) * DEPTH_MULTIPLIER + DEPTH_MULTIPLIER * (total_layers / 2) as f32
}

pub fn project_layer(
    layer: &LayerDescriptor,
    total_layers: usize,
    current: Vec2,
    blur_scale: f32,
) -> ProjectedLayer {
    let depth = layer_depth(layer.index, total_layers);
    let factor = layer.direction.factor();
    let translate = current * depth * TRANSLATE_GAIN * factor;
    ProjectedLayer {
        index: layer.index,
        depth,
        translate_x: translate.x,
        translate_y: translate.y,
        rotate_x_deg: current.y * ROTATION_DEG_PER_UNIT,
        rotate_z_deg: current.x * ROTATION_DEG_PER_UNIT,
        blur_px: depth.abs() / BLUR_DEPTH_DIVISOR * blur_scale,
        z_order: total_layers as i32 - layer.index as i32,
    }
}

/// Project every layer in index order into `out`, reusing its allocation.
pub fn project_all(
    layers: &[LayerDescriptor],
    current: Vec2,
    blur_scale: f32,
    out: &mut Vec<ProjectedLayer>,
) {
    out.clear();
    let total = layers.len();
    out.extend(
        layers
            .iter()
            .map(|layer| project_layer(layer, total, current, blur_scale)),
    );
}

/// Receives projected layers once per tick and applies them to the surface.
pub trait LayerSink {
    fn write_layer(&mut self, layer: &ProjectedLayer) -> Result<(), PresentError>;
}

impl<F> LayerSink for F
where
    F: FnMut(&ProjectedLayer) -> Result<(), PresentError>,
{
    fn write_layer(&mut self, layer: &ProjectedLayer) -> Result<(), PresentError> {
        self(layer)
    }
}
