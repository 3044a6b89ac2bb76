use super::animator::{animate, MarkerTransform, Smoothing};
use super::constants::*;
use super::content::{Identity, IDENTITY, PROJECTS};
use super::interaction::MarkerInteraction;
use super::marker::{Marker, ProjectLink, Rgb, ACCENT_TEAL, GROUND_NAVY, WHITE};
use super::orbit::{OrbitCamera, OrbitConstraints};
use super::picking::{nearest_cube_hit, Ray};
use glam::{Mat4, Quat, Vec2, Vec3};
use smallvec::SmallVec;

// ---------------- Declarative scene description ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: Rgb,
    pub casts_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector the light travels along (from its position toward the origin).
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
}

impl Lighting {
    pub fn directional(&self) -> [&DirectionalLight; 2] {
        [&self.key, &self.fill]
    }
}

/// Image-based lighting preset. The renderer approximates each preset with a
/// sky/ground hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentPreset {
    City,
}

impl EnvironmentPreset {
    pub fn sky(self) -> Rgb {
        match self {
            EnvironmentPreset::City => Rgb::hex(0x8c9bb0),
        }
    }

    pub fn ground(self) -> Rgb {
        match self {
            EnvironmentPreset::City => Rgb::hex(0x3a3530),
        }
    }

    pub fn intensity(self) -> f32 {
        match self {
            EnvironmentPreset::City => 0.35,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactShadow {
    pub y: f32,
    pub scale: f32,
    pub blur: f32,
    pub opacity: f32,
    pub far: f32,
}

/// Darkened disc a caster leaves on the shadow plane. Full strength inside
/// `inner`, fading to nothing at `outer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowFootprint {
    /// Position on the plane (world x, z).
    pub center: Vec2,
    pub inner: f32,
    pub outer: f32,
    pub strength: f32,
}

impl ContactShadow {
    /// Footprint of a caster at `caster`, or `None` when it is below the
    /// plane or farther above it than `far`.
    pub fn footprint(&self, caster: Vec3) -> Option<ShadowFootprint> {
        let h = caster.y - self.y;
        if !(0.0..=self.far).contains(&h) {
            return None;
        }
        let spread = self.scale * 0.08 * (1.0 + h * 0.5);
        // blur widens the penumbra; outer always stays past inner
        let soft = spread * (self.blur * 0.25).max(0.05);
        Some(ShadowFootprint {
            center: Vec2::new(caster.x, caster.z),
            inner: (spread - soft).max(0.0),
            outer: spread + soft,
            strength: 1.0 - h / self.far.max(f32::EPSILON),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    /// Defaults of a standard PBR material.
    pub const fn standard(color: Rgb) -> Self {
        Self {
            color,
            emissive: 0.0,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    pub size: f32,
    pub y: f32,
    pub material: Material,
}

impl GroundPlane {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.size, 1.0, self.size),
            Quat::IDENTITY,
            Vec3::new(0.0, self.y, 0.0),
        )
    }
}

/// Fixed central octahedron carrying the owner's card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdentityMarker {
    pub position: Vec3,
    pub radius: f32,
    pub material: Material,
    pub card_offset: f32,
    pub identity: Identity,
}

impl IdentityMarker {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.radius),
            Quat::IDENTITY,
            self.position,
        )
    }

    pub fn card_anchor(&self) -> Vec3 {
        self.position + Vec3::Y * self.card_offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSetup {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
}

/// Everything the projects view draws, as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescription {
    pub lighting: Lighting,
    pub environment: EnvironmentPreset,
    pub contact_shadow: ContactShadow,
    pub ground: GroundPlane,
    pub markers: Vec<Marker>,
    pub identity: IdentityMarker,
    pub camera: CameraSetup,
    pub orbit: OrbitConstraints,
}

impl SceneDescription {
    pub fn portfolio() -> Self {
        Self::with_markers(&PROJECTS)
    }

    pub fn with_markers(markers: &[Marker]) -> Self {
        Self {
            lighting: Lighting {
                ambient: AMBIENT_INTENSITY,
                key: DirectionalLight {
                    position: KEY_LIGHT_POSITION,
                    intensity: KEY_LIGHT_INTENSITY,
                    color: WHITE,
                    casts_shadow: true,
                },
                fill: DirectionalLight {
                    position: FILL_LIGHT_POSITION,
                    intensity: FILL_LIGHT_INTENSITY,
                    color: ACCENT_TEAL,
                    casts_shadow: false,
                },
            },
            environment: EnvironmentPreset::City,
            contact_shadow: ContactShadow {
                y: CONTACT_SHADOW_Y,
                scale: CONTACT_SHADOW_SCALE,
                blur: CONTACT_SHADOW_BLUR,
                opacity: CONTACT_SHADOW_OPACITY,
                far: CONTACT_SHADOW_FAR,
            },
            ground: GroundPlane {
                size: GROUND_SIZE,
                y: GROUND_Y,
                material: Material {
                    color: GROUND_NAVY,
                    emissive: 0.0,
                    roughness: GROUND_ROUGHNESS,
                    metalness: GROUND_METALNESS,
                },
            },
            markers: markers.to_vec(),
            identity: IdentityMarker {
                position: IDENTITY_POSITION,
                radius: IDENTITY_RADIUS,
                material: Material {
                    emissive: IDENTITY_EMISSIVE,
                    ..Material::standard(ACCENT_TEAL)
                },
                card_offset: IDENTITY_CARD_OFFSET,
                identity: IDENTITY,
            },
            camera: CameraSetup {
                position: CAMERA_POSITION,
                target: CAMERA_TARGET,
                fov_degrees: CAMERA_FOV_DEGREES,
            },
            orbit: OrbitConstraints::default(),
        }
    }

    /// Orbit camera in its initial pose.
    pub fn orbit_camera(&self) -> OrbitCamera {
        let mut cam = OrbitCamera::new(self.camera.position, self.camera.target, self.orbit);
        cam.fovy_radians = self.camera.fov_degrees.to_radians();
        cam
    }
}

// ---------------- Per-frame output ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Cube,
    Octahedron,
    Plane,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub shape: Shape,
    pub model: Mat4,
    pub material: Material,
}

/// Floating info card of a hovered or activated marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfoCard {
    pub marker: usize,
    pub label: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub anchor: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdentityCard {
    pub identity: Identity,
    pub anchor: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub items: SmallVec<[DrawItem; 8]>,
    pub cards: SmallVec<[InfoCard; 4]>,
    pub identity_card: IdentityCard,
    /// Points that darken the ground beneath them.
    pub shadow_casters: SmallVec<[Vec3; 8]>,
}

impl SceneFrame {
    pub fn card_for(&self, marker: usize) -> Option<&InfoCard> {
        self.cards.iter().find(|c| c.marker == marker)
    }
}

// ---------------- Mounted scene ----------------

#[derive(Clone, Debug)]
pub struct MarkerEntity {
    pub marker: Marker,
    pub interaction: MarkerInteraction,
    render: Option<MarkerTransform>,
}

impl MarkerEntity {
    fn new(marker: Marker) -> Self {
        Self {
            marker,
            interaction: MarkerInteraction::default(),
            render: None,
        }
    }

    /// Drawn transform, `None` until the renderer has attached it.
    pub fn transform(&self) -> Option<&MarkerTransform> {
        self.render.as_ref()
    }

    /// Card anchor sits `panel_offset` along the marker's local up axis, so
    /// it tumbles with the cube.
    fn card(&self, index: usize) -> Option<InfoCard> {
        if !self.interaction.panel_visible() {
            return None;
        }
        let local = Vec3::Y * self.interaction.panel_offset();
        let anchor = match &self.render {
            Some(t) => t.model_matrix().transform_point3(local),
            None => self.marker.position + local,
        };
        Some(InfoCard {
            marker: index,
            label: self.marker.label,
            description: self.marker.description,
            link: self.marker.link,
            anchor,
        })
    }
}

/// The projects view while mounted: one entity per marker, each owning its
/// interaction state and (once attached) its render transform.
#[derive(Clone, Debug)]
pub struct ProjectScene {
    entities: Vec<MarkerEntity>,
    ground: GroundPlane,
    identity: IdentityMarker,
    smoothing: Smoothing,
}

impl ProjectScene {
    pub fn mount(desc: &SceneDescription) -> Self {
        Self {
            entities: desc.markers.iter().cloned().map(MarkerEntity::new).collect(),
            ground: desc.ground,
            identity: desc.identity,
            smoothing: Smoothing::default(),
        }
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn entities(&self) -> &[MarkerEntity] {
        &self.entities
    }

    pub fn interaction(&self, index: usize) -> Option<&MarkerInteraction> {
        self.entities.get(index).map(|e| &e.interaction)
    }

    /// Create render transforms for entities that do not have one yet.
    pub fn attach_render_objects(&mut self) {
        for e in &mut self.entities {
            if e.render.is_none() {
                e.render = Some(MarkerTransform::at(e.marker.position));
            }
        }
    }

    pub fn render_ready(&self) -> bool {
        self.entities.iter().all(|e| e.render.is_some())
    }

    /// Advance every attached marker by one frame. Entities without a render
    /// object are skipped.
    pub fn tick(&mut self, dt_sec: f32) {
        let smoothing = self.smoothing;
        for e in &mut self.entities {
            let Some(t) = e.render.as_mut() else { continue };
            animate(
                t,
                e.marker.position,
                dt_sec,
                e.interaction.activated(),
                smoothing,
            );
        }
    }

    /// Closest attached marker under `ray`.
    pub fn hit_test(&self, ray: &Ray) -> Option<usize> {
        nearest_cube_hit(
            ray,
            self.entities
                .iter()
                .map(|e| e.render.map(|t| t.model_matrix())),
            MARKER_SIZE,
        )
    }

    /// Hover the closest marker under the pointer and release every other
    /// one. Returns the hovered index.
    pub fn pointer_move(&mut self, ray: &Ray) -> Option<usize> {
        let hit = self.hit_test(ray);
        for (i, e) in self.entities.iter_mut().enumerate() {
            if e.interaction.set_hovered(hit == Some(i)) {
                log::debug!("[scene] marker {} hovered={}", i, hit == Some(i));
            }
        }
        hit
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        for e in &mut self.entities {
            e.interaction.set_hovered(false);
        }
    }

    /// Toggle the closest marker under `ray`. Returns its index.
    pub fn click(&mut self, ray: &Ray) -> Option<usize> {
        let hit = self.hit_test(ray)?;
        self.toggle_activated(hit);
        Some(hit)
    }

    pub fn set_hovered(&mut self, index: usize, hovered: bool) -> bool {
        self.entities
            .get_mut(index)
            .map(|e| e.interaction.set_hovered(hovered))
            .unwrap_or(false)
    }

    pub fn toggle_activated(&mut self, index: usize) -> Option<bool> {
        let e = self.entities.get_mut(index)?;
        let now = e.interaction.toggle_activated();
        log::info!("[scene] marker {} ({}) activated={}", index, e.marker.label, now);
        Some(now)
    }

    /// Pure snapshot of what to draw this frame.
    pub fn frame(&self) -> SceneFrame {
        let mut items = SmallVec::new();
        let mut cards = SmallVec::new();
        let mut shadow_casters = SmallVec::new();

        items.push(DrawItem {
            shape: Shape::Plane,
            model: self.ground.model_matrix(),
            material: self.ground.material,
        });
        for (i, e) in self.entities.iter().enumerate() {
            if let Some(t) = &e.render {
                items.push(DrawItem {
                    shape: Shape::Cube,
                    model: t.model_matrix(),
                    material: Material::standard(e.interaction.material_color(e.marker.accent)),
                });
                shadow_casters.push(t.position);
            }
            if let Some(card) = e.card(i) {
                cards.push(card);
            }
        }
        items.push(DrawItem {
            shape: Shape::Octahedron,
            model: self.identity.model_matrix(),
            material: self.identity.material,
        });
        shadow_casters.push(self.identity.position);

        SceneFrame {
            items,
            cards,
            identity_card: IdentityCard {
                identity: self.identity.identity,
                anchor: self.identity.card_anchor(),
            },
            shadow_casters,
        }
    }
}
