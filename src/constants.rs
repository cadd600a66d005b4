// Animation constants (logical units unless noted)
pub const FRAME_BASELINE_MS: f64 = 16.666; // 60 updates/s baseline

// Ambient stars
pub const BASE_OPACITY_MIN: f64 = 0.35;
pub const BASE_OPACITY_MAX: f64 = 1.0;
pub const TWINKLE_FREQ_MIN: f64 = 0.002;
pub const TWINKLE_FREQ_MAX: f64 = 0.014;
pub const TWINKLE_AMPLITUDE: f64 = 0.25;
pub const OPACITY_FLOOR: f64 = 0.05;
pub const OPACITY_CEIL: f64 = 1.0;
pub const SPEED_FACTOR_MIN: f64 = 0.05;
pub const SPEED_FACTOR_MAX: f64 = 0.35;
pub const WRAP_MARGIN: f64 = 5.0;

// Shooting stars
pub const SPAWN_REGION_W: f64 = 0.6;  // fraction of surface width
pub const SPAWN_REGION_H: f64 = 0.3;  // fraction of surface height
pub const LAUNCH_ANGLE: f64 = std::f64::consts::FRAC_PI_4;
pub const LAUNCH_JITTER: f64 = 0.4;   // total spread around LAUNCH_ANGLE (rad)
pub const SPEED_BONUS_MAX: f64 = 4.0;
pub const LIFE_MIN: f64 = 80.0;       // frame-time units
pub const LIFE_MAX: f64 = 140.0;
pub const TRAIL_LENGTH: f64 = 30.0;
pub const TRAIL_SCALE: f64 = 0.08;
pub const TRAIL_WIDTH: f64 = 2.0;
pub const HEAD_RADIUS: f64 = 1.6;
pub const CULL_MARGIN: f64 = 50.0;
