// Host-side tests for the projects scene and page-level navigation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code, unused_imports)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod animator {
        include!("../src/core/animator.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
    pub mod marker {
        include!("../src/core/marker.rs");
    }
    pub mod markup {
        include!("../src/core/markup.rs");
    }
    pub mod navigation {
        include!("../src/core/navigation.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
    pub mod picking {
        include!("../src/core/picking.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::animator::Smoothing;
use crate::core::content::PROJECTS;
use crate::core::marker::{ProjectLink, ACCENT_TEAL, MARKER_NEUTRAL, WHITE};
use crate::core::navigation::Section;
use crate::core::page::PageState;
use crate::core::picking::Ray;
use crate::core::scene::*;
use glam::Vec3;

fn mounted() -> ProjectScene {
    let mut scene = ProjectScene::mount(&SceneDescription::portfolio());
    scene.attach_render_objects();
    scene
}

/// Straight down onto the marker at `index`.
fn ray_onto(index: usize) -> Ray {
    let p = PROJECTS[index].position;
    Ray::new(p + Vec3::Y * 5.0, -Vec3::Y)
}

#[test]
fn portfolio_description_has_three_lights_and_the_catalog() {
    let desc = SceneDescription::portfolio();
    assert_eq!(desc.markers.len(), 3);
    assert_eq!(desc.markers, PROJECTS.to_vec());

    assert!((desc.lighting.ambient - 0.4).abs() < 1e-6);
    let [key, fill] = desc.lighting.directional();
    assert_eq!(key.position, Vec3::new(5.0, 10.0, 5.0));
    assert!((key.intensity - 1.0).abs() < 1e-6);
    assert_eq!(key.color, WHITE);
    assert!(key.casts_shadow);
    assert_eq!(fill.position, Vec3::new(-5.0, -10.0, -5.0));
    assert!((fill.intensity - 0.3).abs() < 1e-6);
    assert_eq!(fill.color, ACCENT_TEAL);
    assert!(!fill.casts_shadow);

    assert_eq!(desc.environment, EnvironmentPreset::City);
    assert!((desc.ground.y + 1.0).abs() < 1e-6);
    assert!((desc.ground.size - 20.0).abs() < 1e-6);
    assert_eq!(desc.identity.position, Vec3::new(0.0, 1.5, 0.0));
    assert!(!desc.orbit.enable_pan);
    assert!((desc.orbit.max_polar_angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn key_light_points_down_toward_the_scene() {
    let desc = SceneDescription::portfolio();
    let dir = desc.lighting.key.direction();
    assert!(dir.y < 0.0);
    assert!((dir.length() - 1.0).abs() < 1e-5);
}

#[test]
fn initial_camera_matches_the_description() {
    let desc = SceneDescription::portfolio();
    let cam = desc.orbit_camera();
    assert!((cam.eye() - Vec3::new(0.0, 5.0, 10.0)).length() < 1e-4);
    assert!((cam.fovy_radians - 60f32.to_radians()).abs() < 1e-6);
}

#[test]
fn freshly_mounted_scene_is_idle() {
    let scene = ProjectScene::mount(&SceneDescription::portfolio());
    assert_eq!(scene.entities().len(), 3);
    for i in 0..3 {
        let s = scene.interaction(i).expect("entity");
        assert!(!s.hovered() && !s.activated());
    }
    assert!(scene.interaction(3).is_none());
}

#[test]
fn markers_without_render_objects_are_skipped() {
    let mut scene = ProjectScene::mount(&SceneDescription::portfolio());
    assert!(!scene.render_ready());
    scene.toggle_activated(0);
    for _ in 0..10 {
        scene.tick(1.0 / 60.0);
    }
    assert!(scene.entities().iter().all(|e| e.transform().is_none()));

    // Nothing to hit yet
    assert_eq!(scene.click(&ray_onto(1)), None);

    // Ground and identity marker still draw
    let frame = scene.frame();
    assert_eq!(frame.items.len(), 2);
    assert_eq!(frame.items[0].shape, Shape::Plane);
    assert_eq!(frame.items[1].shape, Shape::Octahedron);

    // Attaching later starts at the base pose
    scene.attach_render_objects();
    assert!(scene.render_ready());
    let t = scene.entities()[0].transform().expect("attached");
    assert_eq!(t.position, PROJECTS[0].position);
    assert_eq!(t.rotation, Vec3::ZERO);
}

#[test]
fn frame_lists_ground_cubes_then_identity() {
    let scene = mounted();
    let frame = scene.frame();
    let shapes: Vec<Shape> = frame.items.iter().map(|i| i.shape).collect();
    assert_eq!(
        shapes,
        vec![Shape::Plane, Shape::Cube, Shape::Cube, Shape::Cube, Shape::Octahedron]
    );
    for item in &frame.items[1..4] {
        assert_eq!(item.material.color, MARKER_NEUTRAL);
    }
    assert!(frame.cards.is_empty());
    assert_eq!(frame.shadow_casters.len(), 4);
    assert!((frame.identity_card.anchor - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-6);
}

#[test]
fn click_toggles_the_marker_under_the_ray() {
    let mut scene = mounted();
    assert_eq!(scene.click(&ray_onto(0)), Some(0));
    assert!(scene.interaction(0).expect("entity").activated());
    assert!(!scene.interaction(1).expect("entity").activated());

    assert_eq!(scene.click(&ray_onto(0)), Some(0));
    assert!(!scene.interaction(0).expect("entity").activated());
}

#[test]
fn click_on_empty_space_changes_nothing() {
    let mut scene = mounted();
    let miss = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::Z);
    assert_eq!(scene.click(&miss), None);
    assert!(scene.entities().iter().all(|e| !e.interaction.activated()));
}

#[test]
fn pointer_move_hovers_only_the_nearest_marker() {
    let mut scene = mounted();
    // Along -X through markers 2 and 0; marker 2 is closer
    let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), -Vec3::X);
    assert_eq!(scene.pointer_move(&ray), Some(2));
    let hovered: Vec<bool> = scene.entities().iter().map(|e| e.interaction.hovered()).collect();
    assert_eq!(hovered, vec![false, false, true]);

    assert_eq!(scene.pointer_move(&ray_onto(1)), Some(1));
    let hovered: Vec<bool> = scene.entities().iter().map(|e| e.interaction.hovered()).collect();
    assert_eq!(hovered, vec![false, true, false]);

    let miss = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::Z);
    assert_eq!(scene.pointer_move(&miss), None);
    assert!(scene.entities().iter().all(|e| !e.interaction.hovered()));
}

#[test]
fn pointer_leave_clears_hover_but_keeps_activation() {
    let mut scene = mounted();
    scene.set_hovered(0, true);
    scene.set_hovered(2, true);
    scene.toggle_activated(2);
    scene.pointer_leave();
    assert!(scene.entities().iter().all(|e| !e.interaction.hovered()));
    assert!(scene.interaction(2).expect("entity").activated());
}

#[test]
fn interaction_is_independent_per_marker() {
    let mut scene = mounted();
    scene.toggle_activated(1);
    scene.set_hovered(0, true);
    assert!(!scene.interaction(0).expect("entity").activated());
    assert!(scene.interaction(1).expect("entity").activated());
    assert!(!scene.interaction(1).expect("entity").hovered());
    assert!(!scene.interaction(2).expect("entity").hovered());
    assert_eq!(scene.toggle_activated(7), None);
    assert!(!scene.set_hovered(7, true));
}

#[test]
fn hovered_marker_shows_accent_and_card() {
    let mut scene = mounted();
    scene.set_hovered(0, true);
    let frame = scene.frame();
    assert_eq!(frame.items[1].material.color, PROJECTS[0].accent);
    assert_eq!(frame.items[2].material.color, MARKER_NEUTRAL);

    let card = frame.card_for(0).expect("card");
    assert_eq!(card.label, PROJECTS[0].label);
    assert_eq!(card.description, PROJECTS[0].description);
    assert!((card.anchor - (PROJECTS[0].position + Vec3::Y * 1.2)).length() < 1e-6);
    assert!(frame.card_for(1).is_none());
}

#[test]
fn activated_card_stays_after_hover_ends_and_rides_higher() {
    let mut scene = mounted();
    scene.set_hovered(2, true);
    scene.toggle_activated(2);
    scene.set_hovered(2, false);
    let frame = scene.frame();
    let card = frame.card_for(2).expect("card while activated");
    assert!((card.anchor - (PROJECTS[2].position + Vec3::Y * 2.0)).length() < 1e-6);
    // Not hovered, so neutral colour
    assert_eq!(frame.items[3].material.color, MARKER_NEUTRAL);

    scene.toggle_activated(2);
    assert!(scene.frame().card_for(2).is_none());
}

#[test]
fn card_follows_the_lifted_marker() {
    let mut scene = mounted();
    scene.toggle_activated(0);
    for _ in 0..30 {
        scene.tick(1.0 / 60.0);
    }
    let t = *scene.entities()[0].transform().expect("attached");
    assert!(t.position.y > 0.0 && t.position.y < 0.5);
    let card = *scene.frame().card_for(0).expect("card");
    let expected = t.model_matrix().transform_point3(Vec3::Y * 2.0);
    assert!((card.anchor - expected).length() < 1e-5);
    assert!((card.anchor - t.position).length() > 1.99);
}

#[test]
fn card_tumbles_with_the_cube() {
    let mut scene = mounted();
    scene.set_hovered(2, true);
    // Long enough for the idle tumble to tilt the local up axis visibly
    for _ in 0..600 {
        scene.tick(1.0 / 60.0);
    }
    let t = *scene.entities()[2].transform().expect("attached");
    let card = *scene.frame().card_for(2).expect("card");
    let offset = card.anchor - t.position;
    assert!((offset.length() - 1.2).abs() < 1e-4);
    assert!((offset - t.orientation() * (Vec3::Y * 1.2)).length() < 1e-4);
    // Tilted away from world up
    assert!(offset.normalize().dot(Vec3::Y) < 0.999);
}

#[test]
fn time_scaled_scene_lifts_the_same_across_refresh_rates() {
    let desc = SceneDescription::portfolio();
    let mut at_60 = ProjectScene::mount(&desc).with_smoothing(Smoothing::time_scaled());
    let mut at_120 = ProjectScene::mount(&desc).with_smoothing(Smoothing::time_scaled());
    for scene in [&mut at_60, &mut at_120] {
        scene.attach_render_objects();
        scene.toggle_activated(1);
    }
    for _ in 0..30 {
        at_60.tick(1.0 / 60.0);
    }
    for _ in 0..60 {
        at_120.tick(1.0 / 120.0);
    }
    let y60 = at_60.entities()[1].transform().expect("attached").position.y;
    let y120 = at_120.entities()[1].transform().expect("attached").position.y;
    assert!(y60 > 0.3 && y60 < 0.5);
    assert!((y60 - y120).abs() < 1e-3);

    // The default per-frame curve lifts twice as many steps at 120 Hz
    let mut per_frame = mounted();
    per_frame.toggle_activated(1);
    for _ in 0..60 {
        per_frame.tick(1.0 / 120.0);
    }
    let y_pf = per_frame.entities()[1].transform().expect("attached").position.y;
    assert!(y_pf > y120 + 0.01);
}

#[test]
fn contact_shadow_footprints_depend_on_height_and_blur() {
    let shadow = SceneDescription::portfolio().contact_shadow;
    let low = shadow.footprint(Vec3::new(-4.0, 0.0, 0.0)).expect("above plane");
    let high = shadow.footprint(Vec3::new(0.0, 1.5, 0.0)).expect("above plane");
    assert_eq!(low.center, glam::Vec2::new(-4.0, 0.0));
    assert!(high.outer > low.outer);
    assert!(high.strength < low.strength);
    assert!(low.inner < low.outer);
    assert!(low.strength > 0.0 && low.strength <= 1.0);

    assert!(shadow.footprint(Vec3::new(0.0, -2.0, 0.0)).is_none());
    assert!(shadow.footprint(Vec3::new(0.0, 20.0, 0.0)).is_none());

    let sharp = ContactShadow { blur: 0.0, ..shadow };
    let soft = ContactShadow { blur: 4.0, ..shadow };
    let penumbra = |s: &ContactShadow| {
        let f = s.footprint(Vec3::ZERO).expect("above plane");
        f.outer - f.inner
    };
    assert!(penumbra(&sharp) > 0.0);
    assert!(penumbra(&sharp) < penumbra(&shadow));
    assert!(penumbra(&shadow) < penumbra(&soft));
}

#[test]
fn placeholder_link_has_no_url() {
    let mut scene = mounted();
    scene.set_hovered(0, true);
    scene.set_hovered(1, true);
    let frame = scene.frame();
    assert!(matches!(frame.card_for(0).expect("card").link, ProjectLink::Url(_)));
    assert_eq!(frame.card_for(1).expect("card").link, ProjectLink::None);
}

#[test]
fn lifted_marker_stays_pickable() {
    let mut scene = mounted();
    scene.toggle_activated(1);
    for _ in 0..200 {
        scene.tick(1.0 / 60.0);
    }
    // Cube centre is now near y = 0.5; a ray at y = 0.9 still hits it
    let p = PROJECTS[1].position;
    let ray = Ray::new(Vec3::new(p.x, 0.9, 10.0), -Vec3::Z);
    assert_eq!(scene.hit_test(&ray), Some(1));
}

#[test]
fn page_starts_on_projects_with_a_scene() {
    let page = PageState::new(SceneDescription::portfolio());
    assert_eq!(page.active(), Section::Projects);
    assert!(page.scene().is_some());
}

#[test]
fn leaving_projects_unmounts_and_returning_resets() {
    let mut page = PageState::new(SceneDescription::portfolio());
    {
        let scene = page.scene_mut().expect("mounted");
        scene.attach_render_objects();
        scene.toggle_activated(0);
        scene.set_hovered(1, true);
    }

    let t = page.navigate(Section::Skills).expect("transition");
    assert_eq!((t.from, t.to), (Section::Projects, Section::Skills));
    assert!(page.scene().is_none());

    page.navigate(Section::Contact).expect("transition");
    assert!(page.scene().is_none());

    page.navigate(Section::Projects).expect("transition");
    let scene = page.scene().expect("remounted");
    assert!(!scene.render_ready());
    for e in scene.entities() {
        assert!(!e.interaction.hovered());
        assert!(!e.interaction.activated());
    }
}

#[test]
fn navigating_to_the_active_section_keeps_state() {
    let mut page = PageState::new(SceneDescription::portfolio());
    page.scene_mut().expect("mounted").toggle_activated(2);
    assert!(page.navigate(Section::Projects).is_none());
    assert!(page.scene().expect("mounted").interaction(2).expect("entity").activated());
}
