use glam::{Mat4, Vec3, Vec4};

use crate::transform::Transform;
use crate::uniforms::{UniformSink, UniformValue};

/// Default spin added on every `update`, in degrees.
pub const DEFAULT_ROTATION_STEP: f32 = 0.5;

/// Per-frame values shared by every draw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameUniforms {
    pub camera_pos: Vec3,
    /// Seconds since startup.
    pub time: f32,
}

/// CPU side of a renderable: transform, material and cached matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectState {
    pub transform: Transform,
    pub rotation_step: f32,
    pub face_culling: bool,
    pub shininess: f32,
    pub color: Vec4,
    model: Mat4,
    pvm: Mat4,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            rotation_step: DEFAULT_ROTATION_STEP,
            face_culling: false,
            shininess: 32.0,
            color: Vec4::ONE,
            model: Mat4::IDENTITY,
            pvm: Mat4::IDENTITY,
        }
    }
}

impl ObjectState {
    /// Spin by one fixed step and cache `view_projection * model`.
    ///
    /// `dt` does not scale the step, so the spin speed follows the frame
    /// rate.
    pub fn update(&mut self, _dt: f32, view_projection: Mat4) {
        self.transform.advance_rotation(self.rotation_step);
        self.model = self.transform.model_matrix();
        self.pvm = view_projection * self.model;
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn pvm(&self) -> Mat4 {
        self.pvm
    }

    /// Push the object's own uniforms. Lights are published separately.
    pub fn write_uniforms(&self, sink: &mut impl UniformSink, frame: &FrameUniforms) {
        sink.set_uniform("Model", UniformValue::Mat4(self.model));
        sink.set_uniform("PVM", UniformValue::Mat4(self.pvm));
        sink.set_uniform("CameraPos", UniformValue::Vec3(frame.camera_pos));
        sink.set_uniform("CurrentTime", UniformValue::Float(frame.time));
        sink.set_uniform("Shininess", UniformValue::Float(self.shininess));
        sink.set_uniform("ObjectColor", UniformValue::Vec4(self.color));
    }
}
