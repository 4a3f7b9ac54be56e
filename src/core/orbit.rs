use crate::core::constants::*;
use crate::core::state::Camera;
use glam::Vec3;

/// Orbit-style camera rig around a look-at target.
///
/// Rotation is spherical (yaw about +y, pitch towards ±y); distance is kept
/// within `[min_distance, max_distance]`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::looking_from(Vec3::from(CAMERA_EYE), Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / offset.length().max(1e-6))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        Self {
            target,
            distance,
            yaw,
            pitch,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::new(self.eye(), self.target, aspect)
    }

    /// Drag by `(dx, dy)` pixels; a full viewport-height drag turns one revolution.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_h: f32) {
        if !self.enable_rotate || viewport_h <= 0.0 {
            return;
        }
        let k = std::f32::consts::TAU * ORBIT_ROTATE_SPEED / viewport_h;
        self.yaw -= dx_px * k;
        self.pitch = (self.pitch + dy_px * k).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Wheel zoom by signed notches: positive moves away, negative moves closer.
    /// Each whole notch scales the distance by one zoom step.
    pub fn zoom(&mut self, notches: f32) {
        if !self.enable_zoom || notches == 0.0 {
            return;
        }
        let factor = ORBIT_ZOOM_STEP.powf(-notches);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Slide the target in the view plane so the point under the cursor follows it.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_h: f32) {
        if !self.enable_pan || viewport_h <= 0.0 {
            return;
        }
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let half_fov = CAMERA_FOV_DEG.to_radians() * 0.5;
        let world_per_px = 2.0 * self.distance * half_fov.tan() / viewport_h;
        self.target += (-dx_px * right + dy_px * up) * world_per_px;
    }
}
