//! Orbit camera: rotation, pan and zoom state for the volume view
//!
//! The camera stores rotation angles in degrees and a view offset (pan x/y,
//! zoom z). All clamping invariants live here; the drag controller only
//! feeds deltas. Matrices are derived fresh every frame from this state.

use volcast_input::ViewControl;

use crate::transform::{
    look_at_matrix, mat4_mul, perspective_matrix, rotation_x_matrix, rotation_y_matrix,
    translation_matrix, Mat4,
};

/// Pitch saturates at +/- this many degrees.
pub const PITCH_LIMIT: f32 = 90.0;
/// Zoom offset range along the view axis.
pub const ZOOM_MIN: f32 = 0.8;
pub const ZOOM_MAX: f32 = 3.0;
/// Pan offset saturates at +/- this value per axis.
pub const PAN_LIMIT: f32 = 1.0;

const DEFAULT_ZOOM: f32 = 1.8;

/// Camera state for orbiting the volume bounding cube.
pub struct OrbitCamera {
    /// Rotation about the X axis in degrees, clamped to [-90, 90].
    pitch: f32,
    /// Rotation about the Y axis in degrees, unbounded.
    yaw: f32,
    /// View offset: pan x, pan y, zoom z.
    offset: [f32; 3],
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Create a camera at the default distance, looking at the volume center.
    pub fn new() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            offset: [0.0, 0.0, DEFAULT_ZOOM],
        }
    }

    /// Reset rotation, pan and zoom to the starting view.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn offset(&self) -> [f32; 3] {
        self.offset
    }

    /// Model matrix: pitch about X, yaw about Y, then recenter the unit cube.
    pub fn model_matrix(&self) -> Mat4 {
        let recenter = translation_matrix(-0.5, -0.5, -0.5);
        let rot_x = rotation_x_matrix((90.0 - self.pitch).to_radians());
        let rot_y = rotation_y_matrix(self.yaw.to_radians());
        mat4_mul(rot_y, mat4_mul(rot_x, recenter))
    }

    /// View matrix: look at the origin from the zoom distance, panned.
    pub fn view_matrix(&self) -> Mat4 {
        let look = look_at_matrix(
            [0.0, 0.0, self.offset[2]],
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        );
        mat4_mul(look, translation_matrix(self.offset[0], self.offset[1], 0.0))
    }

    /// Model-view-projection product for the given projection parameters.
    ///
    /// `fov_y_deg` is the vertical field of view in degrees.
    pub fn mvp(&self, aspect: f32, fov_y_deg: f32, near: f32, far: f32) -> Mat4 {
        let proj = perspective_matrix(fov_y_deg.to_radians(), aspect, near, far);
        mat4_mul(proj, mat4_mul(self.view_matrix(), self.model_matrix()))
    }
}

impl ViewControl for OrbitCamera {
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.offset[0] = (self.offset[0] + delta_x).clamp(-PAN_LIMIT, PAN_LIMIT);
        self.offset[1] = (self.offset[1] + delta_y).clamp(-PAN_LIMIT, PAN_LIMIT);
    }

    fn zoom(&mut self, delta: f32) {
        self.offset[2] = (self.offset[2] + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::transform_point;

    fn assert_near(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_pitch_saturates() {
        let mut camera = OrbitCamera::new();
        for _ in 0..20 {
            camera.rotate(0.0, 37.0);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        for _ in 0..40 {
            camera.rotate(0.0, -37.0);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut camera = OrbitCamera::new();
        for _ in 0..20 {
            camera.rotate(100.0, 0.0);
        }
        assert_eq!(camera.yaw(), 2000.0);
    }

    #[test]
    fn test_zoom_saturates() {
        let mut camera = OrbitCamera::new();
        for _ in 0..10 {
            camera.zoom(5.0);
        }
        assert_eq!(camera.offset()[2], ZOOM_MAX);
        for _ in 0..10 {
            camera.zoom(-5.0);
        }
        assert_eq!(camera.offset()[2], ZOOM_MIN);
    }

    #[test]
    fn test_pan_saturates_per_axis() {
        let mut camera = OrbitCamera::new();
        for _ in 0..10 {
            camera.pan(0.7, -0.7);
        }
        assert_eq!(camera.offset()[0], PAN_LIMIT);
        assert_eq!(camera.offset()[1], -PAN_LIMIT);
    }

    #[test]
    fn test_model_matrix_recenters_cube() {
        // With pitch at 90 the X rotation vanishes; the cube center maps to
        // the origin regardless of yaw
        let mut camera = OrbitCamera::new();
        camera.rotate(123.0, PITCH_LIMIT);
        let center = transform_point(camera.model_matrix(), [0.5, 0.5, 0.5]);
        assert_near(center, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_view_matrix_uses_zoom_distance() {
        let camera = OrbitCamera::new();
        let origin = transform_point(camera.view_matrix(), [0.0, 0.0, 0.0]);
        assert_near(origin, [0.0, 0.0, -DEFAULT_ZOOM]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = OrbitCamera::new();
        camera.rotate(45.0, 30.0);
        camera.pan(0.5, 0.5);
        camera.zoom(1.0);
        camera.reset();
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.offset(), [0.0, 0.0, DEFAULT_ZOOM]);
    }
}
