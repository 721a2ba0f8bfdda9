//! Motion smoothing.
//!
//! Turns the raw pointer target into a lagged trajectory. Two integration
//! models share one state struct; the smoother is the only writer of
//! `current` and `velocity`, and it only writes them inside `tick`.

use crate::config::{MotionModel, RenderConfig};
use crate::constants::QUADRATIC_EASE_T;
use crate::tracker::PointerTarget;
use glam::Vec2;
use std::sync::Arc;

/// Ease-in-out quadratic curve over `t` in [0, 1].
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub target: Vec2,
    pub current: Vec2,
    /// Always zero under the quadratic-ease model.
    pub velocity: Vec2,
}

/// One integration step policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionStrategy {
    /// Discrete damped spring, unclamped. Large easing factors
    /// may overshoot, but friction < 1 keeps the oscillation decaying.
    Damped { easing_factor: f32, friction: f32 },
    /// Fixed fraction `ease_in_out_quad(t)` of the remaining distance per step.
    QuadraticEase { t: f32 },
}

impl MotionStrategy {
    pub fn from_config(config: &RenderConfig) -> Self {
        match config.motion_model {
            MotionModel::Damped => MotionStrategy::Damped {
                easing_factor: config.easing_factor,
                friction: config.friction,
            },
            MotionModel::QuadraticEase => MotionStrategy::QuadraticEase {
                t: QUADRATIC_EASE_T,
            },
        }
    }

    pub fn model(&self) -> MotionModel {
        match self {
            MotionStrategy::Damped { .. } => MotionModel::Damped,
            MotionStrategy::QuadraticEase { .. } => MotionModel::QuadraticEase,
        }
    }

    /// Advance `state` by one tick toward `state.target`.
    pub fn step(&self, state: &mut MotionState) {
        match *self {
            MotionStrategy::Damped {
                easing_factor,
                friction,
            } => {
                let accel = (state.target - state.current) * easing_factor;
                state.velocity = state.velocity * friction + accel;
                state.current += state.velocity;
            }
            MotionStrategy::QuadraticEase { t } => {
                let f = ease_in_out_quad(t);
                state.current += (state.target - state.current) * f;
                state.velocity = Vec2::ZERO;
            }
        }
    }
}

impl Default for MotionStrategy {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

/// Owns the motion state; pointer handlers reach it only through the shared target.
#[derive(Debug)]
pub struct MotionSmoother {
    target: Arc<PointerTarget>,
    state: MotionState,
    strategy: MotionStrategy,
}

impl MotionSmoother {
    pub fn new(strategy: MotionStrategy) -> Self {
        Self {
            target: Arc::new(PointerTarget::default()),
            state: MotionState::default(),
            strategy,
        }
    }

    /// Handle for the pointer side. Writes through it land on the next `tick`.
    pub fn target_handle(&self) -> Arc<PointerTarget> {
        self.target.clone()
    }

    pub fn set_target(&self, x: f32, y: f32) {
        self.target.store(Vec2::new(x, y));
    }

    pub fn strategy(&self) -> MotionStrategy {
        self.strategy
    }

    /// Swap the integration model. The position is kept; velocity is dropped
    /// when the new model does not carry one.
    pub fn set_strategy(&mut self, strategy: MotionStrategy) {
        if let MotionStrategy::QuadraticEase { .. } = strategy {
            self.state.velocity = Vec2::ZERO;
        }
        self.strategy = strategy;
    }

    /// Pull the latest target and advance one step. Returns the new position.
    pub fn tick(&mut self) -> Vec2 {
        self.state.target = self.target.load();
        self.strategy.step(&mut self.state);
        self.state.current
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }
}

impl Default for MotionSmoother {
    fn default() -> Self {
        Self::new(MotionStrategy::default())
    }
}
