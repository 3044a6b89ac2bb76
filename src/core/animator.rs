use crate::constants::{
    ACTIVATED_LIFT, ACTIVE_SPIN_RATE, IDLE_SPIN_RATE, LIFT_SMOOTHING, SMOOTHING_REFERENCE_FPS,
};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// How the vertical lift approaches its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed fraction of the remaining distance each frame. Visual speed
    /// follows the display refresh rate.
    PerFrame(f32),
    /// Same curve as `PerFrame(factor)` at `reference_fps`, rescaled by `dt`
    /// so other refresh rates converge in the same wall-clock time.
    TimeScaled { factor: f32, reference_fps: f32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::PerFrame(LIFT_SMOOTHING)
    }
}

impl Smoothing {
    pub fn time_scaled() -> Self {
        Smoothing::TimeScaled {
            factor: LIFT_SMOOTHING,
            reference_fps: SMOOTHING_REFERENCE_FPS,
        }
    }

    /// Interpolation factor for one frame of length `dt_sec`, in 0..=1.
    pub fn alpha(self, dt_sec: f32) -> f32 {
        match self {
            Smoothing::PerFrame(f) => f.clamp(0.0, 1.0),
            Smoothing::TimeScaled {
                factor,
                reference_fps,
            } => {
                let keep = (1.0 - factor.clamp(0.0, 1.0)).powf(dt_sec.max(0.0) * reference_fps);
                1.0 - keep
            }
        }
    }
}

/// Drawn transform of a marker. Owned by the scene entity's render object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerTransform {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
}

impl MarkerTransform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }
}

#[inline]
pub fn target_height(base: Vec3, activated: bool) -> f32 {
    if activated {
        base.y + ACTIVATED_LIFT
    } else {
        base.y
    }
}

/// Advance one frame.
///
/// Lifts toward `base.y + 0.5` while activated and back to `base.y`
/// otherwise, spins slowly about X and Z at all times, and about Y while
/// activated. Horizontal position stays pinned to `base`.
pub fn animate(
    transform: &mut MarkerTransform,
    base: Vec3,
    dt_sec: f32,
    activated: bool,
    smoothing: Smoothing,
) {
    let target = target_height(base, activated);
    let y = transform.position.y;
    transform.position = Vec3::new(base.x, y + (target - y) * smoothing.alpha(dt_sec), base.z);

    transform.rotation.x += dt_sec * IDLE_SPIN_RATE;
    transform.rotation.z += dt_sec * IDLE_SPIN_RATE;
    if activated {
        transform.rotation.y += dt_sec * ACTIVE_SPIN_RATE;
    }
}
