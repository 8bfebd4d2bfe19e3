//! Object placement: translation, uniform scale and a Y-axis spin.

use glam::{Mat4, Vec3};

/// Position, scale and rotation angle of a renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    /// Rotation about +Y in degrees, kept in `[0, 360)`.
    rotation_degrees: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_degrees: 0.0,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation_degrees = wrap_degrees(degrees);
    }

    /// Advance the spin by `step` degrees, wrapping into `[0, 360)`.
    pub fn advance_rotation(&mut self, step: f32) {
        self.rotation_degrees = wrap_degrees(self.rotation_degrees + step);
    }

    /// `T · R_y · S`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_degrees.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_boundary() {
        let mut t = Transform::default();
        t.set_rotation_degrees(359.6);
        t.advance_rotation(0.5);
        assert!((t.rotation_degrees() - 0.1).abs() < 1e-3, "{}", t.rotation_degrees());
    }

    #[test]
    fn stays_in_range_over_two_turns() {
        let mut t = Transform::default();
        for _ in 0..720 {
            t.advance_rotation(0.5);
            assert!((0.0..360.0).contains(&t.rotation_degrees()));
        }
        assert!(t.rotation_degrees().abs() < 1e-2 || (360.0 - t.rotation_degrees()) < 1e-2);
    }

    #[test]
    fn negative_steps_wrap_upward() {
        let mut t = Transform::default();
        t.advance_rotation(-90.0);
        assert!((t.rotation_degrees() - 270.0).abs() < 1e-4);
        t.advance_rotation(-1e-8);
        assert!((0.0..360.0).contains(&t.rotation_degrees()));
    }

    #[test]
    fn model_matrix_order() {
        let mut t = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        t.scale = Vec3::splat(2.0);
        t.set_rotation_degrees(90.0);

        // +X scaled to 2, rotated 90° about Y to -Z, then translated
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5, "{p}");
    }

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform::default().model_matrix(), Mat4::IDENTITY);
    }
}
