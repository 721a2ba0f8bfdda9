// Host-side tests for the frame scheduler and the engine facade, driven by a
// manual frame host standing in for requestAnimationFrame.

use glam::Vec2;
use parallax_core::*;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct ManualHost {
    next_id: u32,
    pending: Vec<u32>,
    requested: usize,
    cancelled: Vec<u32>,
    refuse: bool,
}

impl FrameHost for ManualHost {
    type Request = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested += 1;
        self.pending.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, request: u32) {
        self.pending.retain(|&p| p != request);
        self.cancelled.push(request);
    }
}

fn discard(_: &ProjectedLayer) -> Result<(), PresentError> {
    Ok(())
}

/// Fire the oldest pending request at `now_ms`, as the browser would.
fn pump(engine: &mut ParallaxEngine<ManualHost>, now_ms: f64) -> FrameOutcome {
    let host = engine.host_mut();
    assert!(!host.pending.is_empty(), "no frame was armed");
    host.pending.remove(0);
    engine.on_frame(now_ms, &mut discard)
}

fn started(num_layers: usize, config: RenderConfig) -> ParallaxEngine<ManualHost> {
    let mut engine = ParallaxEngine::new(ManualHost::default(), 42);
    engine.initialize(num_layers, config).expect("initialize");
    engine
}

#[test]
fn scheduler_throttles_fast_host_ticks() {
    let mut engine = started(5, RenderConfig::default());
    let mut tick_times = Vec::new();
    let mut polls = 0;
    let mut t = 0.0;
    while t <= 1000.0 {
        polls += 1;
        if pump(&mut engine, t) == FrameOutcome::Ticked {
            tick_times.push(t);
        }
        t += 5.0;
    }

    // every opportunity re-arms, even the idle ones
    assert_eq!(engine.host().requested, 1 + polls);
    assert_eq!(engine.host().pending.len(), 1);

    assert!(tick_times.len() as f64 <= 1000.0 / FRAME_INTERVAL_MS + 1.0);
    assert!(tick_times.len() < polls / 2);
    for w in tick_times.windows(2) {
        assert!(w[1] - w[0] >= FRAME_INTERVAL_MS, "ticks too close: {:?}", w);
    }
    assert_eq!(engine.ticks(), tick_times.len() as u64);
}

#[test]
fn scheduler_ticks_on_first_poll_then_waits_for_interval() {
    let mut scheduler = FrameScheduler::<u32>::default();
    let mut host = ManualHost::default();
    scheduler.start(&mut host).unwrap();
    assert_eq!(scheduler.poll(&mut host, 100.0), FramePoll::Due);
    assert_eq!(scheduler.poll(&mut host, 110.0), FramePoll::Idle);
    assert_eq!(scheduler.poll(&mut host, 116.0), FramePoll::Idle);
    assert_eq!(scheduler.poll(&mut host, 117.0), FramePoll::Due);
    assert_eq!(scheduler.last_tick_ms(), Some(117.0));
}

#[test]
fn scheduler_reanchors_when_clock_steps_back() {
    let mut scheduler = FrameScheduler::<u32>::new(10.0);
    let mut host = ManualHost::default();
    scheduler.start(&mut host).unwrap();
    assert_eq!(scheduler.poll(&mut host, 500.0), FramePoll::Due);
    assert_eq!(scheduler.poll(&mut host, 20.0), FramePoll::Idle);
    assert_eq!(scheduler.poll(&mut host, 25.0), FramePoll::Idle);
    assert_eq!(scheduler.poll(&mut host, 30.0), FramePoll::Due);
}

#[test]
fn scheduler_rejects_double_start() {
    let mut scheduler = FrameScheduler::<u32>::default();
    let mut host = ManualHost::default();
    assert_eq!(scheduler.start(&mut host), Ok(1));
    assert_eq!(
        scheduler.start(&mut host),
        Err(SchedulerError::AlreadyRunning { generation: 1 })
    );
    assert_eq!(host.pending.len(), 1);

    assert_eq!(scheduler.restart(&mut host), Ok(2));
    assert_eq!(host.cancelled, vec![1]);
    assert_eq!(host.pending, vec![2]);
}

#[test]
fn scheduler_reports_refused_request() {
    let mut scheduler = FrameScheduler::<u32>::default();
    let mut host = ManualHost {
        refuse: true,
        ..ManualHost::default()
    };
    assert_eq!(
        scheduler.start(&mut host),
        Err(SchedulerError::RequestRejected)
    );
    assert!(!scheduler.is_running());
    assert_eq!(scheduler.poll(&mut host, 0.0), FramePoll::Stopped);
}

#[test]
fn stop_without_loop_is_a_no_op() {
    let mut scheduler = FrameScheduler::<u32>::default();
    let mut host = ManualHost::default();
    assert!(!scheduler.stop(&mut host));
    assert!(host.cancelled.is_empty());
}

#[test]
fn initialize_builds_layers_and_arms_one_frame() {
    let engine = started(12, RenderConfig::default());
    assert_eq!(engine.layers().len(), 12);
    assert!(engine.is_running());
    assert_eq!(engine.generation(), Some(1));
    assert_eq!(engine.host().pending, vec![1]);
    assert!(engine.host().cancelled.is_empty());
}

#[test]
fn reinitialize_cancels_previous_loop_and_reseeds() {
    let mut engine = started(8, RenderConfig::default());
    let before = engine.layers().to_vec();
    engine.initialize(8, RenderConfig::default()).unwrap();
    assert_eq!(engine.host().cancelled, vec![1]);
    assert_eq!(engine.host().pending, vec![2]);
    assert_eq!(engine.generation(), Some(2));
    assert_ne!(before, engine.layers().to_vec());
}

#[test]
fn initialize_clamps_layer_count() {
    let mut engine = started(0, RenderConfig::default());
    assert_eq!(engine.layers().len(), MIN_LAYERS);
    engine.initialize(10_000, RenderConfig::default()).unwrap();
    assert_eq!(engine.layers().len(), MAX_LAYERS);
}

#[test]
fn tick_emits_every_layer_in_order() {
    let mut engine = started(6, RenderConfig::default());
    engine.update_pointer_target(800.0, 300.0, 800.0, 600.0);
    let mut seen = Vec::new();
    engine.host_mut().pending.clear();
    let outcome = engine.on_frame(0.0, &mut |l: &ProjectedLayer| -> Result<(), PresentError> {
        seen.push(l.index);
        Ok(())
    });
    assert_eq!(outcome, FrameOutcome::Ticked);
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(engine.projected().len(), 6);
    assert!(engine.motion().current.x > 0.0);
    assert_eq!(engine.motion().target, Vec2::new(0.2, 0.0));
}

#[test]
fn update_config_restarts_loop_and_applies_next_tick() {
    let mut engine = started(4, RenderConfig::default());
    engine.update_pointer_target(0.0, 600.0, 800.0, 600.0);
    let mut t = 0.0;
    for _ in 0..5 {
        assert_eq!(pump(&mut engine, t), FrameOutcome::Ticked);
        t += 20.0;
    }

    let requested_before = engine.host().requested;
    engine
        .update_config(ConfigPatch {
            easing_factor: Some(0.02),
            ..ConfigPatch::default()
        })
        .expect("reconfigure");
    // exactly one prior chain cancelled, exactly one new one armed
    assert_eq!(engine.host().cancelled.len(), 1);
    assert_eq!(engine.host().pending.len(), 1);
    assert_eq!(engine.host().requested, requested_before + 1);
    assert_eq!(engine.config().easing_factor, 0.02);

    let mut expected = *engine.motion();
    expected.target = engine.pointer_target().load();
    MotionStrategy::Damped {
        easing_factor: 0.02,
        friction: DEFAULT_FRICTION,
    }
    .step(&mut expected);

    assert_eq!(pump(&mut engine, t), FrameOutcome::Ticked);
    assert_eq!(*engine.motion(), expected);
}

#[test]
fn update_config_switches_motion_model() {
    let mut engine = started(3, RenderConfig::default());
    engine
        .update_config(ConfigPatch {
            motion_model: Some(MotionModel::QuadraticEase),
            ..ConfigPatch::default()
        })
        .unwrap();
    assert_eq!(engine.strategy().model(), MotionModel::QuadraticEase);
    engine.update_pointer_target(800.0, 600.0, 800.0, 600.0);
    pump(&mut engine, 0.0);
    assert_eq!(engine.motion().velocity, Vec2::ZERO);
    assert!((engine.motion().current.x - 0.2 * 0.02).abs() < 1e-6);
}

#[test]
fn update_config_sanitizes_values() {
    let mut engine = started(3, RenderConfig::default());
    engine
        .update_config(ConfigPatch {
            blur_scale: Some(-2.0),
            circle_size_scale: Some(f32::NAN),
            friction: Some(1.5),
            ..ConfigPatch::default()
        })
        .unwrap();
    let c = engine.config();
    assert_eq!(c.blur_scale, 0.0);
    assert_eq!(c.circle_size_scale, DEFAULT_CIRCLE_SIZE_SCALE);
    assert_eq!(c.friction, FRICTION_MAX);
}

#[test]
fn missing_layers_are_skipped_not_fatal() {
    let mut engine = started(5, RenderConfig::default());
    let mut written = Vec::new();
    let mut sink = |l: &ProjectedLayer| -> Result<(), PresentError> {
        if l.index == 2 {
            return Err(PresentError::MissingLayer(2));
        }
        written.push(l.index);
        Ok(())
    };
    engine.host_mut().pending.clear();
    assert_eq!(engine.on_frame(0.0, &mut sink), FrameOutcome::Ticked);
    engine.host_mut().pending.clear();
    assert_eq!(engine.on_frame(20.0, &mut sink), FrameOutcome::Ticked);
    assert_eq!(written, vec![0, 1, 3, 4, 0, 1, 3, 4]);
    assert_eq!(engine.skipped_writes(), 2);
    assert_eq!(engine.ticks(), 2);
}

#[test]
fn teardown_cancels_and_ignores_later_input() {
    let mut engine = started(4, RenderConfig::default());
    engine.update_pointer_target(800.0, 600.0, 800.0, 600.0);
    let tracked = engine.pointer_target().load();
    engine.teardown();

    assert!(!engine.is_running());
    assert!(engine.is_torn_down());
    assert_eq!(engine.host().cancelled, vec![1]);
    assert!(engine.host().pending.is_empty());

    engine.update_pointer_target(0.0, 0.0, 800.0, 600.0);
    assert_eq!(engine.pointer_target().load(), tracked);

    let requested = engine.host().requested;
    assert_eq!(engine.on_frame(100.0, &mut discard), FrameOutcome::Stopped);
    assert_eq!(engine.host().requested, requested);

    // config changes after teardown do not revive the loop
    engine
        .update_config(ConfigPatch {
            blur_scale: Some(2.0),
            ..ConfigPatch::default()
        })
        .unwrap();
    assert!(!engine.is_running());

    engine.teardown();
    assert_eq!(engine.host().cancelled.len(), 1);
}

#[test]
fn initialize_after_teardown_restarts() {
    let mut engine = started(4, RenderConfig::default());
    engine.teardown();
    engine.initialize(6, RenderConfig::default()).unwrap();
    assert!(engine.is_running());
    assert!(!engine.is_torn_down());
    assert_eq!(engine.layers().len(), 6);
}

#[test]
fn pointer_target_normalizes_and_scales() {
    let center = pointer_target(400.0, 300.0, 800.0, 600.0).unwrap();
    assert!(center.abs().max_element() < 1e-7);
    let top_left = pointer_target(0.0, 0.0, 800.0, 600.0).unwrap();
    assert!((top_left - Vec2::new(-0.2, -0.2)).abs().max_element() < 1e-6);
    let bottom_right = pointer_target(800.0, 600.0, 800.0, 600.0).unwrap();
    assert!((bottom_right - Vec2::new(0.2, 0.2)).abs().max_element() < 1e-6);
}

#[test]
fn pointer_target_ignores_degenerate_viewports() {
    assert!(pointer_target(10.0, 10.0, 0.0, 600.0).is_none());
    assert!(pointer_target(10.0, 10.0, 800.0, -1.0).is_none());
    assert!(pointer_target(f32::NAN, 10.0, 800.0, 600.0).is_none());

    let target = PointerTarget::new(Vec2::new(0.1, 0.1));
    assert!(!target.track(5.0, 5.0, 0.0, 0.0));
    assert_eq!(target.load(), Vec2::new(0.1, 0.1));
}

#[test]
fn pointer_target_pair_is_never_torn() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PointerTarget>();

    let target = Arc::new(PointerTarget::default());
    let writer = {
        let target = target.clone();
        std::thread::spawn(move || {
            for i in 0..20_000 {
                let v = i as f32 * 1e-5;
                target.store(Vec2::new(v, -v));
            }
        })
    };
    for _ in 0..20_000 {
        let v = target.load();
        assert_eq!(v.x, -v.y);
    }
    writer.join().unwrap();
}

#[test]
fn preferences_load_defaults_and_clamp() {
    let empty = Preferences::load(|_| None);
    assert_eq!(empty, Preferences::default());
    assert_eq!(empty.num_layers, DEFAULT_NUM_LAYERS);

    let mut store = HashMap::new();
    store.insert(PREF_NUM_LAYERS, "5000".to_string());
    store.insert(PREF_EASING_FACTOR, "0.008".to_string());
    store.insert(PREF_BLUR_SCALE, "not a number".to_string());
    store.insert(PREF_CIRCLE_SIZE_SCALE, "-1".to_string());
    let prefs = Preferences::load(|k| store.get(k).cloned());
    assert_eq!(prefs.num_layers, MAX_LAYERS);
    assert_eq!(prefs.easing_factor, 0.008);
    assert_eq!(prefs.blur_scale, DEFAULT_BLUR_SCALE);
    assert_eq!(prefs.circle_size_scale, 0.0);
}

#[test]
fn preferences_entries_reload_to_same_values() {
    let config = RenderConfig {
        easing_factor: 0.003,
        blur_scale: 2.5,
        circle_size_scale: 0.75,
        ..RenderConfig::default()
    };
    let prefs = Preferences::capture(120, &config);
    let store: HashMap<&str, String> = prefs.entries().into_iter().collect();
    let loaded = Preferences::load(|k| store.get(k).cloned());
    assert_eq!(loaded, prefs);

    let applied = loaded.render_config(RenderConfig {
        motion_model: MotionModel::QuadraticEase,
        ..RenderConfig::default()
    });
    assert_eq!(applied.motion_model, MotionModel::QuadraticEase);
    assert_eq!(applied.blur_scale, 2.5);
}

#[test]
fn config_merge_and_sanitize() {
    let base = RenderConfig::default();
    assert!(ConfigPatch::default().is_empty());
    let merged = base.merged(&ConfigPatch {
        easing_factor: Some(0.02),
        ..ConfigPatch::default()
    });
    assert_eq!(merged.easing_factor, 0.02);
    assert_eq!(merged.blur_scale, base.blur_scale);

    let wild = RenderConfig {
        easing_factor: f32::INFINITY,
        friction: -0.5,
        blur_scale: 9.0,
        circle_size_scale: 0.5,
        motion_model: MotionModel::Damped,
    }
    .sanitized();
    assert_eq!(wild.easing_factor, DEFAULT_EASING_FACTOR);
    assert_eq!(wild.friction, 0.0);
    assert_eq!(wild.blur_scale, BLUR_SCALE_MAX);
    assert_eq!(wild.circle_size_scale, 0.5);
}
