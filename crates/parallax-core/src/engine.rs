//! Engine facade tying tracker, smoother, scheduler, registry and projector
//! together behind the host-facing operations.

use crate::config::{clamp_layer_count, ConfigPatch, RenderConfig};
use crate::error::SchedulerError;
use crate::motion::{MotionSmoother, MotionState, MotionStrategy};
use crate::projector::{project_all, LayerSink, ProjectedLayer};
use crate::registry::{LayerDescriptor, LayerRegistry};
use crate::scheduler::{FrameHost, FramePoll, FrameScheduler};
use crate::tracker::PointerTarget;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Result of handing one host frame opportunity to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The engine is not running; the host callback should not re-arm.
    Stopped,
    /// Throttled: nothing was written this frame.
    Idle,
    /// Motion advanced and every layer was handed to the sink.
    Ticked,
}

pub struct ParallaxEngine<H: FrameHost> {
    host: H,
    config: RenderConfig,
    registry: LayerRegistry,
    smoother: MotionSmoother,
    scheduler: FrameScheduler<H::Request>,
    projected: Vec<ProjectedLayer>,
    rng: StdRng,
    torn_down: bool,
    ticks: u64,
    skipped_writes: u64,
}

impl<H: FrameHost> ParallaxEngine<H> {
    /// Build an idle engine; nothing is scheduled until `initialize`.
    pub fn new(host: H, seed: u64) -> Self {
        Self {
            host,
            config: RenderConfig::default(),
            registry: LayerRegistry::new(),
            smoother: MotionSmoother::default(),
            scheduler: FrameScheduler::default(),
            projected: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            torn_down: false,
            ticks: 0,
            skipped_writes: 0,
        }
    }

    /// Rebuild the layer stack with fresh randomness, install `config` and
    /// (re)start the frame loop. The smoothed position carries over.
    pub fn initialize(
        &mut self,
        num_layers: usize,
        config: RenderConfig,
    ) -> Result<(), SchedulerError> {
        self.torn_down = false;
        self.config = config.sanitized();
        let count = self
            .registry
            .reseed(clamp_layer_count(num_layers), &mut self.rng);
        self.smoother
            .set_strategy(MotionStrategy::from_config(&self.config));
        self.projected.clear();
        let generation = self.scheduler.restart(&mut self.host)?;
        log::info!(
            "[engine] initialized layers={} model={} loop=#{}",
            count,
            self.config.motion_model.name(),
            generation
        );
        Ok(())
    }

    /// Store a raw pointer position as the new target. Ignored after teardown.
    pub fn update_pointer_target(
        &self,
        client_x: f32,
        client_y: f32,
        viewport_w: f32,
        viewport_h: f32,
    ) {
        if self.torn_down {
            return;
        }
        self.smoother
            .target_handle()
            .track(client_x, client_y, viewport_w, viewport_h);
    }

    /// Shared target for pointer handlers that should not touch the engine.
    pub fn pointer_target(&self) -> Arc<PointerTarget> {
        self.smoother.target_handle()
    }

    /// Merge `patch` into the active config and restart the loop so the
    /// next tick runs with the new values.
    pub fn update_config(&mut self, patch: ConfigPatch) -> Result<(), SchedulerError> {
        self.config = self.config.merged(&patch).sanitized();
        self.smoother
            .set_strategy(MotionStrategy::from_config(&self.config));
        if self.torn_down {
            return Ok(());
        }
        let generation = self.scheduler.restart(&mut self.host)?;
        log::debug!("[engine] config updated, loop=#{}", generation);
        Ok(())
    }

    /// Cancel the pending frame and stop accepting pointer updates.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.scheduler.stop(&mut self.host);
        self.torn_down = true;
        log::info!("[engine] torn down after {} ticks", self.ticks);
    }

    /// Handle one host frame opportunity at wall-clock `now_ms`.
    pub fn on_frame<S>(&mut self, now_ms: f64, sink: &mut S) -> FrameOutcome
    where
        S: LayerSink + ?Sized,
    {
        match self.scheduler.poll(&mut self.host, now_ms) {
            FramePoll::Stopped => return FrameOutcome::Stopped,
            FramePoll::Idle => return FrameOutcome::Idle,
            FramePoll::Due => {}
        }

        let current = self.smoother.tick();
        project_all(
            self.registry.layers(),
            current,
            self.config.blur_scale,
            &mut self.projected,
        );
        for layer in &self.projected {
            if let Err(e) = sink.write_layer(layer) {
                log::trace!("[engine] skipped layer {}: {}", layer.index, e);
                self.skipped_writes += 1;
            }
        }
        self.ticks += 1;
        FrameOutcome::Ticked
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        self.registry.layers()
    }

    /// Output of the most recent tick.
    pub fn projected(&self) -> &[ProjectedLayer] {
        &self.projected
    }

    pub fn motion(&self) -> &MotionState {
        self.smoother.state()
    }

    pub fn strategy(&self) -> MotionStrategy {
        self.smoother.strategy()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Generation of the live loop, if one is running.
    pub fn generation(&self) -> Option<u64> {
        self.scheduler.handle().map(|h| h.generation())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn skipped_writes(&self) -> u64 {
        self.skipped_writes
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
