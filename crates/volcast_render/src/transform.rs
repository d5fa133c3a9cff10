//! 4x4 matrix helpers for building the per-frame transforms
//!
//! Matrices are `[[f32; 4]; 4]` arrays of columns (`m[col][row]`), the
//! layout WGSL expects for a `mat4x4<f32>` uniform. The camera derives its
//! model/view/projection product from these every frame; there is no cached
//! matrix state anywhere.

/// Column-major 4x4 matrix.
pub type Mat4 = [[f32; 4]; 4];

/// The identity matrix.
pub fn identity_matrix() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Matrix product `a * b` (apply `b` first, then `a`).
pub fn mat4_mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            result[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    result
}

/// Transform a point, dividing by the resulting w component.
pub fn transform_point(m: Mat4, p: [f32; 3]) -> [f32; 3] {
    let v = [p[0], p[1], p[2], 1.0];
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * v[0] + m[1][row] * v[1] + m[2][row] * v[2] + m[3][row] * v[3];
    }
    let w = if out[3] != 0.0 { out[3] } else { 1.0 };
    [out[0] / w, out[1] / w, out[2] / w]
}

/// Perspective projection with wgpu's [0, 1] depth range.
///
/// Right-handed: the camera looks down -Z; z = -near maps to depth 0 and
/// z = -far to depth 1.
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// View matrix looking from `eye` toward `target`.
pub fn look_at_matrix(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize([target[0] - eye[0], target[1] - eye[1], target[2] - eye[2]]);
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot(s, eye), -dot(u, eye), dot(f, eye), 1.0],
    ]
}

/// Rotation about the X axis by `angle` radians.
pub fn rotation_x_matrix(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Y axis by `angle` radians.
pub fn rotation_y_matrix(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation by (x, y, z).
pub fn translation_matrix(x: f32, y: f32, z: f32) -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_identity_leaves_points() {
        let p = transform_point(identity_matrix(), [1.0, 2.0, 3.0]);
        assert_near(p, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_translation() {
        let m = translation_matrix(1.0, -2.0, 0.5);
        assert_near(transform_point(m, [0.0, 0.0, 0.0]), [1.0, -2.0, 0.5]);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let m = rotation_y_matrix(std::f32::consts::FRAC_PI_2);
        // +X rotates toward -Z
        assert_near(transform_point(m, [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_mul_applies_right_matrix_first() {
        let rotate = rotation_y_matrix(std::f32::consts::FRAC_PI_2);
        let translate = translation_matrix(1.0, 0.0, 0.0);
        // translate then rotate: (0,0,0) -> (1,0,0) -> (0,0,-1)
        let m = mat4_mul(rotate, translate);
        assert_near(transform_point(m, [0.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective_matrix(std::f32::consts::FRAC_PI_3, 1.0, 0.01, 1000.0);
        // wgpu clip space: near plane at depth 0, far plane at depth 1
        let near = transform_point(proj, [0.0, 0.0, -0.01]);
        let far = transform_point(proj, [0.0, 0.0, -1000.0]);
        assert!(near[2].abs() < 1e-4);
        assert!((far[2] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let view = look_at_matrix([0.0, 0.0, 1.8], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        // The target ends up in front of the camera along -Z
        assert_near(transform_point(view, [0.0, 0.0, 0.0]), [0.0, 0.0, -1.8]);
        assert_near(transform_point(view, [0.0, 0.0, 1.8]), [0.0, 0.0, 0.0]);
    }
}
