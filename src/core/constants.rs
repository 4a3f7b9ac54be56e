// Shared timing, camera and scene tuning constants used by the web frontend.

// UI timeline (milliseconds)
pub const PROGRESS_STEP_PERCENT: u32 = 10;
pub const PROGRESS_TICK_MS: u64 = 200;
pub const PROGRESS_MAX_PERCENT: u32 = 100;
pub const LOADING_SETTLE_MS: u64 = 500; // loading screen lingers after 100%
pub const TEXT_REVEAL_MS: u64 = 300;
pub const SUBTITLE_REVEAL_MS: u64 = 1000;
pub const HINT_FADE_MS: u64 = 3000;
pub const GLOW_OFF_MS: u64 = 4000;

// Rotate hint opacity before and after the fade timer
pub const HINT_OPACITY_FULL: f32 = 1.0;
pub const HINT_OPACITY_FADED: f32 = 0.2;

// Loading ring (svg circle radius in px)
pub const LOADING_RING_RADIUS: f32 = 50.0;

// Persisted preference key
pub const REDUCE_MOTION_KEY: &str = "reduceMotion";

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full viewport height drag = 2π * speed
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch
pub const ORBIT_PITCH_LIMIT: f32 = 1.553; // just short of π/2

// Wave rings
pub const RING_INNER_RADIUS: f32 = 1.0;
pub const RING_OUTER_RADIUS: f32 = 5.0;
pub const RING_SEGMENTS: u32 = 64;
pub const WAVE_GROUP_Z: f32 = -2.5;
pub const WAVE_LAYER_COUNT: usize = 3;
pub const WAVE_LAYER_OFFSETS_Z: [f32; WAVE_LAYER_COUNT] = [0.0, -0.3, -0.6];
pub const WAVE_LAYER_SCALES: [f32; WAVE_LAYER_COUNT] = [1.0, 0.8, 1.2];
// Angular velocities (rad/s) in ratio 1 : -1.5 : 0.8
pub const WAVE_LAYER_RATES: [f32; WAVE_LAYER_COUNT] = [0.07, -0.105, 0.056];

// Model
pub const MODEL_TARGET_SIZE: f32 = 2.8;
pub const MODEL_YAW: f32 = -std::f32::consts::FRAC_PI_2;
pub const MODEL_BASE_COLOR: [f32; 3] = [0.85, 0.7, 0.5];
pub const MODEL_LIGHT_DIR: [f32; 3] = [1.0, 1.0, 1.0];
pub const MODEL_PATH: &str = "/monk.obj";

// Background clear
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
