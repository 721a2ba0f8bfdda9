use crate::config::clamp_layer_count;
use crate::constants::INITIAL_OFFSET_RANGE;
use glam::Vec2;
use rand::Rng;

/// Which way a layer drifts relative to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriftDirection {
    With,
    Against,
}

impl DriftDirection {
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            DriftDirection::With => 1.0,
            DriftDirection::Against => -1.0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            DriftDirection::With
        } else {
            DriftDirection::Against
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerDescriptor {
    pub index: usize,
    pub direction: DriftDirection,
    /// Static seed offset of the layer's circle, px. Not touched by the loop.
    pub initial_offset: Vec2,
}

/// Ordered stack of layers with their per-layer random seeds.
#[derive(Clone, Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<LayerDescriptor>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every descriptor with `count` freshly randomized ones.
    ///
    /// Nothing of the previous stack survives, including layers whose index
    /// still exists. Returns the clamped count actually allocated.
    pub fn reseed<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let count = clamp_layer_count(count);
        self.layers.clear();
        self.layers.reserve(count);
        for index in 0..count {
            let direction = DriftDirection::random(rng);
            let initial_offset = Vec2::new(
                rng.gen_range(-INITIAL_OFFSET_RANGE..INITIAL_OFFSET_RANGE),
                rng.gen_range(-INITIAL_OFFSET_RANGE..INITIAL_OFFSET_RANGE),
            );
            self.layers.push(LayerDescriptor {
                index,
                direction,
                initial_offset,
            });
        }
        log::debug!("[layers] reseeded {} layers", count);
        count
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LayerDescriptor> {
        self.layers.get(index)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
