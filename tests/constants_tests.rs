// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_is_ordered() {
    // ten ticks reach 100%, then the settle delay
    assert_eq!(PROGRESS_MAX_PERCENT / PROGRESS_STEP_PERCENT, 10);
    assert!(TEXT_REVEAL_MS < SUBTITLE_REVEAL_MS);
    assert!(SUBTITLE_REVEAL_MS < HINT_FADE_MS);
    assert!(HINT_FADE_MS < GLOW_OFF_MS);
    assert!(HINT_OPACITY_FADED < HINT_OPACITY_FULL);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_inside_orbit_range() {
    let eye_dist = (CAMERA_EYE[0].powi(2) + CAMERA_EYE[1].powi(2) + CAMERA_EYE[2].powi(2)).sqrt();
    assert!(eye_dist >= ORBIT_MIN_DISTANCE && eye_dist <= ORBIT_MAX_DISTANCE);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(ORBIT_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
fn wave_layers_sit_behind_the_model() {
    for off in WAVE_LAYER_OFFSETS_Z {
        assert!(WAVE_GROUP_Z + off < 0.0);
    }
    assert!((WAVE_LAYER_RATES[1] / WAVE_LAYER_RATES[0] + 1.5).abs() < 1e-5);
    assert!((WAVE_LAYER_RATES[2] / WAVE_LAYER_RATES[0] - 0.8).abs() < 1e-5);
    assert!(RING_INNER_RADIUS < RING_OUTER_RADIUS);
}
