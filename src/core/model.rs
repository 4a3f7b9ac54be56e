use crate::core::constants::{MODEL_BASE_COLOR, MODEL_LIGHT_DIR, MODEL_YAW};
use crate::core::effect::{MotionPolicy, SceneUniforms};
use crate::core::geometry::MeshData;
use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Union of every position across all meshes.
    pub fn from_meshes(meshes: &[MeshData]) -> Option<Self> {
        Self::from_points(
            meshes
                .iter()
                .flat_map(|m| m.positions.iter().copied().map(Vec3::from)),
        )
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn max_extent(&self) -> f32 {
        self.size().max_element()
    }
}

/// Re-centering translation and isotropic scale for a raw asset.
///
/// The translation is applied to the asset's local origin before scaling, so
/// the scaled result stays centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedTransform {
    pub translation: Vec3,
    pub scale: f32,
}

impl NormalizedTransform {
    pub fn fit(bounds: &Aabb, target_size: f32) -> Self {
        let extent = bounds.max_extent();
        let scale = if extent > 0.0 {
            target_size / extent
        } else {
            1.0
        };
        Self {
            translation: -bounds.center(),
            scale,
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(self.translation)
    }
}

/// Flat Lambert material shared by every sub-mesh of the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertMaterial {
    pub base_color: Vec3,
    pub light_dir: Vec3,
}

impl Default for LambertMaterial {
    fn default() -> Self {
        Self {
            base_color: Vec3::from(MODEL_BASE_COLOR),
            light_dir: Vec3::from(MODEL_LIGHT_DIR).normalize(),
        }
    }
}

/// Half-Lambert term used by `fs_model` in `model.wgsl`: never darker than
/// half the base color, always opaque.
pub fn lambert_shade(normal: Vec3, material: &LambertMaterial) -> [f32; 4] {
    let n = normal.try_normalize().unwrap_or(Vec3::Z);
    let l = material.light_dir.try_normalize().unwrap_or(Vec3::Z);
    let diff = n.dot(l).max(0.0);
    let c = material.base_color * (0.5 + 0.5 * diff);
    [c.x, c.y, c.z, 1.0]
}

/// The loaded asset with its fixed transform and shared material.
pub struct LoadedModel {
    pub meshes: Vec<MeshData>,
    pub bounds: Aabb,
    pub transform: NormalizedTransform,
    pub material: LambertMaterial,
}

#[derive(Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(LoadedModel),
    Failed,
}

/// Owns the single model asset and its time uniform.
pub struct ModelPresenter {
    target_size: f32,
    state: LoadState,
    pub uniforms: SceneUniforms,
}

impl ModelPresenter {
    pub fn new(target_size: f32) -> Self {
        Self {
            target_size,
            state: LoadState::Pending,
            uniforms: SceneUniforms::default(),
        }
    }

    /// Accept the parsed asset. Only the first successful load is kept so the
    /// transform is computed exactly once.
    pub fn on_loaded(&mut self, meshes: Vec<MeshData>) -> bool {
        if !matches!(self.state, LoadState::Pending) {
            log::debug!("model already settled; ignoring reload");
            return false;
        }
        let Some(bounds) = Aabb::from_meshes(&meshes) else {
            log::warn!("model has no vertices; nothing to draw");
            self.state = LoadState::Failed;
            return false;
        };
        let transform = NormalizedTransform::fit(&bounds, self.target_size);
        log::info!(
            "[model] meshes={} extent={:.3} scale={:.4}",
            meshes.len(),
            bounds.max_extent(),
            transform.scale
        );
        self.state = LoadState::Ready(LoadedModel {
            meshes,
            bounds,
            transform,
            material: LambertMaterial::default(),
        });
        true
    }

    pub fn on_failed(&mut self, reason: &str) {
        log::warn!("model load failed: {reason}");
        if matches!(self.state, LoadState::Pending) {
            self.state = LoadState::Failed;
        }
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        match &self.state {
            LoadState::Ready(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    pub fn update(&mut self, elapsed_sec: f32, motion: MotionPolicy) {
        if motion.is_reduced() {
            return;
        }
        self.uniforms.time = elapsed_sec;
    }

    /// Full model matrix: fixed display yaw, then scale, then re-centering.
    pub fn model_matrix(&self) -> Option<Mat4> {
        self.model()
            .map(|m| Mat4::from_rotation_y(MODEL_YAW) * m.transform.matrix())
    }
}
