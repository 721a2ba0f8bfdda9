// Motion, projection and scheduling tuning constants shared with the front-end.

// Frame scheduling: logical update rate, independent of display refresh
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

// Pointer tracking
pub const POINTER_CENTER: f32 = 0.5; // subtracted from the [0, 1] viewport ratio
pub const POINTER_TARGET_SCALE: f32 = 0.4; // maps [-0.5, 0.5] to [-0.2, 0.2]

// Quadratic-ease model: fixed progress fed through ease-in-out quad
pub const QUADRATIC_EASE_T: f32 = 0.1;

// Depth projection
pub const DEPTH_MULTIPLIER: f32 = 100.0; // depth step between adjacent layers
pub const TRANSLATE_GAIN: f32 = 2.0;
pub const ROTATION_DEG_PER_UNIT: f32 = 90.0;
pub const BLUR_DEPTH_DIVISOR: f32 = 50.0; // |depth| / divisor = blur px at scale 1

// Layer registry
pub const MIN_LAYERS: usize = 1;
pub const MAX_LAYERS: usize = 1000;
pub const INITIAL_OFFSET_RANGE: f32 = 250.0; // per-axis circle seed offset, px

// Defaults
pub const DEFAULT_NUM_LAYERS: usize = 30;
pub const DEFAULT_EASING_FACTOR: f32 = 0.005;
pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_BLUR_SCALE: f32 = 1.0;
pub const DEFAULT_CIRCLE_SIZE_SCALE: f32 = 1.0;

// Clamp limits applied when sanitizing configuration
pub const EASING_FACTOR_MAX: f32 = 1.0;
pub const FRICTION_MAX: f32 = 0.99; // must stay below 1 for convergence
pub const BLUR_SCALE_MAX: f32 = 3.0;
pub const CIRCLE_SIZE_SCALE_MAX: f32 = 3.0;

// Presentation
pub const PERSPECTIVE_PX: f32 = 1100.0;
pub const CIRCLE_BASE_SIZE_PX: f32 = 100.0;
