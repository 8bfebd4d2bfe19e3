//! Free-fly camera driven by held keys.

use glam::{Mat3, Mat4, Vec3};
use lumen_config::schema::CameraConfig;
use lumen_platform::MoveIntent;
use lumen_renderer::CameraView;

const PITCH_LIMIT: f32 = 89.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw_degrees: f32,
    pitch_degrees: f32,
    fov_degrees: f32,
    near: f32,
    far: f32,
    move_speed: f32,
    turn_speed_degrees: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from(config.position),
            yaw_degrees: config.yaw_degrees,
            pitch_degrees: config.pitch_degrees.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
            move_speed: config.move_speed,
            turn_speed_degrees: config.turn_speed_degrees,
        }
    }

    /// Unit view direction. Yaw -90° looks down -Z.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw_degrees.to_radians(), self.pitch_degrees.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// Turn first, then move along the new heading. Up/down is world space.
    pub fn apply(&mut self, intent: MoveIntent, dt: f32) {
        if intent.is_idle() {
            return;
        }
        let turn = self.turn_speed_degrees * dt;
        self.yaw_degrees = (self.yaw_degrees + intent.yaw * turn).rem_euclid(360.0);
        self.pitch_degrees =
            (self.pitch_degrees + intent.pitch * turn).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let front = self.front();
        let right = front.cross(Vec3::Y).normalize();
        let step = self.move_speed * dt;
        self.position +=
            (front * intent.forward + right * intent.right + Vec3::Y * intent.up) * step;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.front(), Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }

    /// Matrices for one frame at the given aspect ratio.
    pub fn frame_view(&self, aspect: f32) -> CameraView {
        let projection = self.projection(aspect);
        let view = self.view();
        // Rotation only, so the skybox stays centred on the camera.
        let rotation = Mat4::from_mat3(Mat3::from_mat4(view));
        CameraView {
            view_projection: projection * view,
            skybox_view_projection: projection * rotation,
            position: self.position,
        }
    }
}
