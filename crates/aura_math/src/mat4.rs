//! 4x4 matrix utilities for the 3D camera
//!
//! Matrices are column-major (`m[column][row]`), the layout WGSL expects
//! for `mat4x4<f32>` uniforms.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Right-handed perspective projection with a `[0, 1]` depth range
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Width / height
/// * `near`, `far` - Clip plane distances (both positive)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = far / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, range, -1.0],
        [0.0, 0.0, range * near, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Multiply two matrices (`a * b`, so `b` is applied first)
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for (c, col) in result.iter_mut().enumerate() {
        for (r, value) in col.iter_mut().enumerate() {
            *value = (0..4).map(|k| a[k][r] * b[c][k]).sum();
        }
    }
    result
}

/// Transform a point (w = 1) and apply the perspective divide
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    let v = [p.x, p.y, p.z, 1.0];
    let mut out = [0.0f32; 4];
    for (r, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|c| m[c][r] * v[c]).sum();
    }
    if out[3].abs() > f32::EPSILON {
        Vec3::new(out[0] / out[3], out[1] / out[3], out[2] / out[3])
    } else {
        Vec3::new(out[0], out[1], out[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_mul() {
        let m = look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Z);
        assert_eq!(mul(IDENTITY, m), m);
        assert_eq!(mul(m, IDENTITY), m);
    }

    #[test]
    fn test_look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(0.0, -5.0, 0.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Z);
        let p = transform_point(view, Vec3::ZERO);
        assert!(approx(p, Vec3::new(0.0, 0.0, -5.0)), "got {:?}", p);
    }

    #[test]
    fn test_look_at_keeps_up_vertical() {
        let view = look_at(Vec3::new(0.0, -5.0, 0.0), Vec3::ZERO, Vec3::Z);
        let p = transform_point(view, Vec3::Z);
        assert!(p.y > 0.99);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        let near = transform_point(proj, Vec3::new(0.0, 0.0, -0.1));
        let far = transform_point(proj, Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
