// Host-side tests for pointer bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn press_and_release_in_place_is_a_click() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(100.0, 100.0));
    assert!(tracker.is_pressed());
    assert_eq!(tracker.release(Vec2::new(100.0, 100.0)), Release::Click);
    assert!(!tracker.is_pressed());
}

#[test]
fn small_jitter_is_still_a_click() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(50.0, 50.0));
    let delta = tracker.moved(Vec2::new(52.0, 51.0));
    assert_eq!(delta, Some(Vec2::new(2.0, 1.0)));
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.release(Vec2::new(52.0, 51.0)), Release::Click);
}

#[test]
fn travel_past_tolerance_becomes_a_drag() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(0.0, 0.0));
    tracker.moved(Vec2::new(10.0, 0.0));
    assert!(tracker.is_dragging());

    // Returning to the start does not turn the drag back into a click
    tracker.moved(Vec2::new(0.0, 0.0));
    assert_eq!(tracker.release(Vec2::new(0.0, 0.0)), Release::Drag);
    assert!(!tracker.is_dragging());
}

#[test]
fn moves_without_press_only_track_position() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.moved(Vec2::new(30.0, 40.0)), None);
    assert_eq!(tracker.last, Vec2::new(30.0, 40.0));
    assert!(!tracker.is_dragging());
}

#[test]
fn release_without_press_is_stray() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.release(Vec2::new(1.0, 1.0)), Release::Stray);

    tracker.press(Vec2::ZERO);
    tracker.cancel();
    assert_eq!(tracker.release(Vec2::ZERO), Release::Stray);
}

#[test]
fn move_deltas_are_relative_to_the_previous_position() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(10.0, 10.0));
    assert_eq!(tracker.moved(Vec2::new(15.0, 10.0)), Some(Vec2::new(5.0, 0.0)));
    assert_eq!(tracker.moved(Vec2::new(15.0, 4.0)), Some(Vec2::new(0.0, -6.0)));
}

#[test]
fn cancelled_press_stops_orbiting_on_hover() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(10.0, 10.0));
    assert_eq!(tracker.moved(Vec2::new(200.0, 10.0)), Some(Vec2::new(190.0, 0.0)));
    assert!(tracker.is_dragging());

    tracker.cancel();
    assert!(!tracker.is_pressed());
    assert!(!tracker.is_dragging());

    // Later moves with no button down only hover
    assert_eq!(tracker.moved(Vec2::new(300.0, 10.0)), None);
    assert_eq!(tracker.moved(Vec2::new(320.0, 40.0)), None);
    assert!(!tracker.is_dragging());

    // The next real press behaves normally
    tracker.press(Vec2::new(320.0, 40.0));
    assert_eq!(tracker.release(Vec2::new(321.0, 40.0)), Release::Click);
}

#[test]
fn hidden_canvas_keeps_its_backing_size() {
    assert_eq!(backing_size(Vec2::ZERO, 2.0), None);
    assert_eq!(backing_size(Vec2::new(800.0, 0.0), 1.0), None);
    assert_eq!(backing_size(Vec2::new(0.5, 600.0), 1.0), None);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(Vec2::new(800.0, 600.0), 1.0), Some((800, 600)));
    assert_eq!(backing_size(Vec2::new(800.0, 600.0), 2.0), Some((1600, 1200)));
    assert_eq!(backing_size(Vec2::new(3.0, 3.0), 0.1), Some((1, 1)));
}
