/// Frame animation and interaction tuning constants.
///
/// These constants express intended behavior (smoothing factors, angular
/// rates, clamp limits) and keep magic numbers out of the code.
// Vertical lift of an activated marker (world units)
pub const ACTIVATED_LIFT: f32 = 0.5;

// Fraction of the remaining vertical distance covered per frame
pub const LIFT_SMOOTHING: f32 = 0.1;

// Reference rate for the opt-in time-scaled smoothing
pub const SMOOTHING_REFERENCE_FPS: f32 = 60.0;

// Angular rates (radians per second)
pub const IDLE_SPIN_RATE: f32 = 0.1; // about local X and Z, always
pub const ACTIVE_SPIN_RATE: f32 = 0.5; // about local Y, while activated

// Floating card heights above a marker
pub const CARD_OFFSET_IDLE: f32 = 1.2;
pub const CARD_OFFSET_ACTIVATED: f32 = 2.0;

// Pointer travel (CSS px) between down and up that still counts as a click
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per CSS px
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // fraction of distance per wheel delta unit
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MIN_POLAR: f32 = 0.01;

// Frame delta clamp (seconds); a backgrounded tab reports huge deltas
pub const MAX_FRAME_DT: f32 = 0.25;
