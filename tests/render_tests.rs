// Host-side tests for GPU setup helpers that need no device.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod helpers {
    include!("../src/render/helpers.rs");
}

use helpers::*;
use wgpu::TextureFormat as F;

#[test]
fn linear_swapchain_is_preferred_over_srgb() {
    let formats = [F::Bgra8UnormSrgb, F::Rgba8UnormSrgb, F::Bgra8Unorm];
    assert_eq!(pick_surface_format(&formats), Some(F::Bgra8Unorm));
    let formats = [F::Rgba8UnormSrgb, F::Rgba8Unorm];
    assert_eq!(pick_surface_format(&formats), Some(F::Rgba8Unorm));
}

#[test]
fn other_linear_formats_beat_srgb() {
    let formats = [F::Bgra8UnormSrgb, F::Rgba16Float];
    assert_eq!(pick_surface_format(&formats), Some(F::Rgba16Float));
}

#[test]
fn falls_back_to_first_reported_format() {
    assert_eq!(pick_surface_format(&[F::Bgra8UnormSrgb]), Some(F::Bgra8UnormSrgb));
    assert_eq!(pick_surface_format(&[]), None);
}

#[test]
fn colors_pack_with_explicit_alpha() {
    assert_eq!(rgb_to_vec4([0.85, 0.7, 0.5], 1.0), [0.85, 0.7, 0.5, 1.0]);
    let cols = mat4_cols(glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(cols[3], [1.0, 2.0, 3.0, 1.0]);
}
