use super::constants::{CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use glam::{Mat4, Vec3};

/// Limits applied by the orbit controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConstraints {
    pub enable_pan: bool,
    /// Largest angle between the view offset and +Y, radians.
    pub max_polar_angle: f32,
}

impl Default for OrbitConstraints {
    fn default() -> Self {
        Self {
            enable_pan: false,
            max_polar_angle: std::f32::consts::FRAC_PI_2,
        }
    }
}

/// Right-handed perspective camera orbiting a fixed target.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    distance: f32,
    /// Angle from +Y, radians.
    polar: f32,
    /// Angle around Y measured from +Z toward +X, radians.
    azimuth: f32,
    pub fovy_radians: f32,
    pub constraints: OrbitConstraints,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, constraints: OrbitConstraints) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let mut cam = Self {
            target,
            distance,
            polar,
            azimuth,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            constraints,
        };
        cam.clamp();
        cam
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }

    /// Drag by `(dx, dy)` CSS pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_ROTATE_SPEED;
        self.polar -= dy * ORBIT_ROTATE_SPEED;
        self.clamp();
    }

    /// Wheel delta; positive moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let scale = (1.0 + delta * ORBIT_ZOOM_SPEED).max(0.1);
        self.distance *= scale;
        self.clamp();
    }

    fn clamp(&mut self) {
        let max_polar = self.constraints.max_polar_angle.max(ORBIT_MIN_POLAR);
        self.polar = self.polar.clamp(ORBIT_MIN_POLAR, max_polar);
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
