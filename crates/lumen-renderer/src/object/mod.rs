//! Renderable objects: a mesh, a transform and per-program uniform blocks.

mod state;

use std::collections::HashMap;

use glam::{Mat4, Vec3, Vec4};

use crate::lighting::{publish, LightingState};
use crate::mesh::{GpuMesh, Mesh};
use crate::shader::{PipelineKey, PolygonFill, ProgramId, ShaderLibrary, StencilMode};
use crate::texture::{TextureId, TextureLibrary};
use crate::transform::Transform;
use crate::uniforms::UniformBlock;

pub use state::{FrameUniforms, ObjectState, DEFAULT_ROTATION_STEP};

/// Everything a draw needs besides the object itself.
pub struct DrawContext<'a, 'p> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub pass: &'a mut wgpu::RenderPass<'p>,
    pub programs: &'a ShaderLibrary,
    pub textures: &'a TextureLibrary,
    pub frame: FrameUniforms,
    pub polygon: PolygonFill,
    pub stencil: StencilMode,
}

/// A mesh on the GPU plus its transform and material.
///
/// Uniform blocks are created the first time the object is drawn with a
/// program, so one object can be drawn by several programs.
pub struct RenderableObject {
    label: String,
    mesh: GpuMesh,
    texture: Option<TextureId>,
    state: ObjectState,
    blocks: HashMap<ProgramId, UniformBlock>,
}

impl RenderableObject {
    pub fn new(device: &wgpu::Device, label: &str, mesh: &Mesh, texture: Option<TextureId>) -> Self {
        Self {
            label: label.to_string(),
            mesh: GpuMesh::upload(device, mesh, label),
            texture,
            state: ObjectState::default(),
            blocks: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.state.transform.position = position;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.state.transform.scale = scale;
    }

    pub fn set_face_culling(&mut self, enabled: bool) {
        self.state.face_culling = enabled;
    }

    pub fn set_rotation_step(&mut self, degrees: f32) {
        self.state.rotation_step = degrees;
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.state.shininess = shininess;
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.state.color = color;
    }

    pub fn transform(&self) -> &Transform {
        &self.state.transform
    }

    pub fn state(&self) -> &ObjectState {
        &self.state
    }

    pub fn update(&mut self, dt: f32, view_projection: Mat4) {
        self.state.update(dt, view_projection);
    }

    /// Push uniforms and lights into this object's block for `program` and
    /// issue one indexed draw. An unknown program draws nothing.
    pub fn render(
        &mut self,
        draw: &mut DrawContext<'_, '_>,
        lighting: &LightingState,
        program: ProgramId,
    ) {
        let (device, programs, textures) = (draw.device, draw.programs, draw.textures);
        let Some(shader) = programs.get(program) else {
            tracing::trace!(object = %self.label, ?program, "Unknown program, skipping draw");
            return;
        };

        let key = PipelineKey {
            cull: self.state.face_culling,
            polygon: draw.polygon,
            stencil: draw.stencil,
        };
        let Some(pipeline) = shader.pipeline(key) else {
            tracing::trace!(object = %self.label, ?key, "No pipeline variant, skipping draw");
            return;
        };

        let label = &self.label;
        let texture = self.texture;
        let block = self.blocks.entry(program).or_insert_with(|| {
            let bound = textures.resolve(texture, shader.texture_slot());
            UniformBlock::new(device, shader.layout().clone(), label, |buffer| {
                shader.create_bind_group(device, label, buffer, bound)
            })
        });

        self.state.write_uniforms(block, &draw.frame);
        publish(block, lighting);
        block.upload(draw.queue);

        draw.pass.set_pipeline(pipeline);
        draw.pass.set_bind_group(0, block.bind_group(), &[]);
        self.mesh.draw(draw.pass);
    }
}
