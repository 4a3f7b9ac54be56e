use crate::core::constants::*;
use crate::core::geometry::{DiscGeometry, MeshData, RingGeometry};
use glam::{Mat4, Quat, Vec3};

/// Whether time-driven visuals are allowed to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPolicy {
    #[default]
    Animate,
    Reduced,
}

impl MotionPolicy {
    pub fn from_reduce_flag(reduce_motion: bool) -> Self {
        if reduce_motion {
            MotionPolicy::Reduced
        } else {
            MotionPolicy::Animate
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self == MotionPolicy::Reduced
    }
}

/// Per-program uniform values written once per frame by the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneUniforms {
    pub time: f32,
    pub opacity: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveShape {
    Ring,
    Disc,
}

/// Color and frequency constants for one wave look.
///
/// All variants share the same vertex/fragment structure; only these numbers
/// change between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveStyle {
    pub shape: WaveShape,
    pub inner_color: [f32; 3],
    pub outer_color: [f32; 3],
    pub glow_color: [f32; 3],
    pub ripple_freq: f32,
    pub ripple_speed: f32,
    pub pulse_speed: f32,
    pub vertex_freq: f32,
    pub vertex_speed: f32,
    pub vertex_amp: f32,
    pub fade_center: [f32; 2],
    pub fade_edge: [f32; 2],
    pub alpha_ceiling: f32,
}

impl WaveStyle {
    /// Cyan concentric ripples on rings.
    pub const fn ring_wave() -> Self {
        Self {
            shape: WaveShape::Ring,
            inner_color: [0.05, 0.2, 0.5],
            outer_color: [0.3, 0.9, 1.0],
            glow_color: [0.1, 0.3, 0.5],
            ripple_freq: 6.0,
            ripple_speed: 3.0,
            pulse_speed: 1.2,
            vertex_freq: 4.0,
            vertex_speed: 2.5,
            vertex_amp: 0.15,
            fade_center: [1.0, 1.8],
            fade_edge: [4.2, 5.0],
            alpha_ceiling: 0.35,
        }
    }

    /// Warm radial aura with a soft glow, drawn on discs.
    pub const fn radial_aura() -> Self {
        Self {
            shape: WaveShape::Disc,
            inner_color: [0.45, 0.15, 0.02],
            outer_color: [1.0, 0.65, 0.2],
            glow_color: [0.6, 0.35, 0.1],
            ripple_freq: 3.5,
            ripple_speed: 1.6,
            pulse_speed: 0.8,
            vertex_freq: 2.0,
            vertex_speed: 1.2,
            vertex_amp: 0.08,
            fade_center: [0.2, 1.4],
            fade_edge: [3.8, 5.0],
            alpha_ceiling: 0.45,
        }
    }

    /// Violet palette on rings with a tighter ripple.
    pub const fn violet_ring_wave() -> Self {
        Self {
            shape: WaveShape::Ring,
            inner_color: [0.2, 0.05, 0.45],
            outer_color: [0.75, 0.45, 1.0],
            glow_color: [0.3, 0.15, 0.5],
            ripple_freq: 8.0,
            ripple_speed: 3.6,
            pulse_speed: 1.0,
            vertex_freq: 4.0,
            vertex_speed: 2.5,
            vertex_amp: 0.12,
            fade_center: [1.0, 1.8],
            fade_edge: [4.2, 5.0],
            alpha_ceiling: 0.3,
        }
    }

    pub fn geometry(&self) -> MeshData {
        match self.shape {
            WaveShape::Ring => {
                RingGeometry::new(RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS).build()
            }
            WaveShape::Disc => DiscGeometry::new(RING_OUTER_RADIUS, RING_SEGMENTS).build(),
        }
    }
}

impl Default for WaveStyle {
    fn default() -> Self {
        Self::ring_wave()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    pub offset_z: f32,
    pub scale: f32,
    pub angular_rate: f32,
    pub rotation: f32,
}

/// Translucent layered rings sharing one mesh and one uniform set.
pub struct WaveEffect {
    pub style: WaveStyle,
    pub mesh: MeshData,
    pub uniforms: SceneUniforms,
    pub layers: [WaveLayer; WAVE_LAYER_COUNT],
}

impl WaveEffect {
    pub fn new(style: WaveStyle) -> Self {
        let layers = std::array::from_fn(|i| WaveLayer {
            offset_z: WAVE_LAYER_OFFSETS_Z[i],
            scale: WAVE_LAYER_SCALES[i],
            angular_rate: WAVE_LAYER_RATES[i],
            rotation: 0.0,
        });
        Self {
            mesh: style.geometry(),
            style,
            uniforms: SceneUniforms::default(),
            layers,
        }
    }

    /// Advance the shared time uniform and each layer's spin.
    ///
    /// Under reduced motion nothing is touched, so consecutive frames are
    /// visually identical.
    pub fn update(&mut self, elapsed_sec: f32, motion: MotionPolicy) {
        if motion.is_reduced() {
            return;
        }
        self.uniforms.time = elapsed_sec;
        for layer in &mut self.layers {
            layer.rotation = elapsed_sec * layer.angular_rate;
        }
    }

    pub fn is_visible(&self, motion: MotionPolicy) -> bool {
        !motion.is_reduced()
    }

    pub fn layer_transforms(&self) -> [Mat4; WAVE_LAYER_COUNT] {
        std::array::from_fn(|i| {
            let l = &self.layers[i];
            Mat4::from_scale_rotation_translation(
                Vec3::new(l.scale, l.scale, 1.0),
                Quat::from_rotation_z(l.rotation),
                Vec3::new(0.0, 0.0, WAVE_GROUP_Z + l.offset_z),
            )
        })
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Vertex-stage z displacement for a vertex at `radius` from the ring center.
/// Mirrors `vs_wave` in `waves.wgsl`.
#[inline]
pub fn wave_displacement(radius: f32, time: f32, style: &WaveStyle) -> f32 {
    let wave = (radius * style.vertex_freq - time * style.vertex_speed).sin() * style.vertex_amp;
    wave * (1.0 - radius / RING_OUTER_RADIUS)
}

/// Traveling ripple remapped to [0, 1].
#[inline]
pub fn ripple(distance: f32, time: f32, style: &WaveStyle) -> f32 {
    (distance * style.ripple_freq - time * style.ripple_speed).sin() * 0.5 + 0.5
}

/// Slow global brightness pulse in [0.4, 1.0].
#[inline]
pub fn pulse(time: f32, style: &WaveStyle) -> f32 {
    (time * style.pulse_speed).sin() * 0.3 + 0.7
}

/// Fragment-stage color for a point `distance` away from the ring center.
/// Mirrors `fs_wave` in `waves.wgsl`; returns straight (non-premultiplied) RGBA.
pub fn wave_fragment(distance: f32, time: f32, opacity: f32, style: &WaveStyle) -> [f32; 4] {
    let fade_edge = 1.0 - smoothstep(style.fade_edge[0], style.fade_edge[1], distance);
    let fade_center = smoothstep(style.fade_center[0], style.fade_center[1], distance);
    let r = ripple(distance, time, style);
    let p = pulse(time, style);

    let alpha = fade_edge * fade_center * r * p * opacity * style.alpha_ceiling;

    let mut color = mix3(style.inner_color, style.outer_color, r);
    for (c, g) in color.iter_mut().zip(style.glow_color) {
        *c += g * p * 0.3;
    }
    [color[0], color[1], color[2], alpha]
}
