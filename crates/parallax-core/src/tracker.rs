//! Pointer target tracking.
//!
//! Converts raw pointer coordinates into the normalized target the motion
//! smoother chases. Nothing here smooths or renders; handlers only store.

use crate::constants::{POINTER_CENTER, POINTER_TARGET_SCALE};
use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

/// Map a pointer position inside a viewport to a target in roughly [-0.2, 0.2].
///
/// Returns `None` when the viewport has no usable area.
#[inline]
pub fn pointer_target(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Option<Vec2> {
    let usable = |d: f32| d.is_finite() && d > 0.0;
    if !usable(viewport_w) || !usable(viewport_h) || !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    let mouse_x = client_x / viewport_w - POINTER_CENTER;
    let mouse_y = client_y / viewport_h - POINTER_CENTER;
    Some(Vec2::new(mouse_x, mouse_y) * POINTER_TARGET_SCALE)
}

/// Latest pointer target, shared between the event handler and the frame loop.
///
/// Both components live in one 64-bit word so a reader never observes an x
/// from one event paired with a y from another.
#[derive(Debug, Default)]
pub struct PointerTarget {
    packed: AtomicU64,
}

impl PointerTarget {
    pub fn new(initial: Vec2) -> Self {
        Self {
            packed: AtomicU64::new(pack(initial)),
        }
    }

    #[inline]
    pub fn store(&self, target: Vec2) {
        self.packed.store(pack(target), Ordering::Relaxed);
    }

    #[inline]
    pub fn load(&self) -> Vec2 {
        unpack(self.packed.load(Ordering::Relaxed))
    }

    /// Normalize and store a raw pointer position; degenerate viewports are ignored.
    pub fn track(&self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> bool {
        match pointer_target(client_x, client_y, viewport_w, viewport_h) {
            Some(t) => {
                self.store(t);
                true
            }
            None => false,
        }
    }
}

#[inline]
fn pack(v: Vec2) -> u64 {
    ((v.x.to_bits() as u64) << 32) | v.y.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}
