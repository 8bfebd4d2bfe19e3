use glam::Mat4;

use crate::lighting::LightingState;
use crate::mesh::generate_cube;
use crate::object::{DrawContext, RenderableObject};
use crate::shader::ProgramId;
use crate::texture::TextureId;

/// Unit cube drawn around the camera with the environment cubemap.
///
/// The vertex shader writes `z = w`, so the cube lands on the far plane and
/// only fills pixels nothing else covered.
pub struct Skybox {
    object: RenderableObject,
}

impl Skybox {
    pub fn new(device: &wgpu::Device, cubemap: Option<TextureId>) -> Self {
        let mut object = RenderableObject::new(device, "skybox", &generate_cube(1.0), cubemap);
        object.set_rotation_step(0.0);
        Self { object }
    }

    /// `view_projection` must have the camera translation removed.
    pub fn update(&mut self, dt: f32, view_projection: Mat4) {
        self.object.update(dt, view_projection);
    }

    pub fn render(
        &mut self,
        draw: &mut DrawContext<'_, '_>,
        lighting: &LightingState,
        program: ProgramId,
    ) {
        self.object.render(draw, lighting, program);
    }
}
