// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn primary_button_rotates_others_pan() {
    assert_eq!(drag_mode(0, false), DragMode::Rotate);
    assert_eq!(drag_mode(0, true), DragMode::Pan);
    assert_eq!(drag_mode(1, false), DragMode::Pan);
    assert_eq!(drag_mode(2, false), DragMode::Pan);
}

#[test]
fn pointer_reports_deltas_only_while_down() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(Vec2::new(10.0, 10.0)), None);
    p.press(Vec2::new(10.0, 10.0), DragMode::Rotate);
    assert_eq!(
        p.move_to(Vec2::new(15.0, 7.0)),
        Some((DragMode::Rotate, Vec2::new(5.0, -3.0)))
    );
    assert_eq!(
        p.move_to(Vec2::new(15.0, 9.0)),
        Some((DragMode::Rotate, Vec2::new(0.0, 2.0)))
    );
    p.release();
    assert_eq!(p.move_to(Vec2::new(0.0, 0.0)), None);
    assert!(!p.down);
}

#[test]
fn wheel_deltas_normalize_across_modes() {
    assert_eq!(wheel_notches(0.0, 0), 0.0);
    assert!((wheel_notches(100.0, 0) - 1.0).abs() < 1e-6);
    assert!((wheel_notches(-3.0, 1) + 0.48).abs() < 1e-6);
    assert_eq!(wheel_notches(1.0, 2), 3.0);
    assert_eq!(wheel_notches(-5000.0, 0), -3.0);
}

#[test]
fn only_m_toggles_motion() {
    assert_eq!(key_action("m"), Some(KeyAction::ToggleMotion));
    assert_eq!(key_action("M"), Some(KeyAction::ToggleMotion));
    assert_eq!(key_action("n"), None);
    assert_eq!(key_action("Escape"), None);
}
