use glam::Vec3;

// Shared scene layout constants used by the composer and the renderer.

// Camera
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 10.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, -10.0, -5.0);
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

// Ground plane
pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_Y: f32 = -1.0;
pub const GROUND_ROUGHNESS: f32 = 0.8;
pub const GROUND_METALNESS: f32 = 0.1;

// Contact shadow
pub const CONTACT_SHADOW_Y: f32 = -0.9;
pub const CONTACT_SHADOW_SCALE: f32 = 10.0;
pub const CONTACT_SHADOW_BLUR: f32 = 2.0;
pub const CONTACT_SHADOW_OPACITY: f32 = 0.6;
pub const CONTACT_SHADOW_FAR: f32 = 10.0;

// Central identity marker
pub const IDENTITY_POSITION: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const IDENTITY_RADIUS: f32 = 0.8;
pub const IDENTITY_EMISSIVE: f32 = 0.2;
pub const IDENTITY_CARD_OFFSET: f32 = 1.5;

// Project markers are unit cubes
pub const MARKER_SIZE: f32 = 1.0;
