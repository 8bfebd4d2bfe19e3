use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::gpu::{RendererError, DEPTH_STENCIL_FORMAT};
use crate::mesh::Vertex;
use crate::texture::Texture;
use crate::uniforms::UniformLayout;

use super::pipeline_key::{PipelineKey, PolygonFill};

/// Texture binding a program samples, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    None,
    D2,
    Cube,
}

impl TextureSlot {
    fn view_dimension(self) -> Option<wgpu::TextureViewDimension> {
        match self {
            TextureSlot::None => None,
            TextureSlot::D2 => Some(wgpu::TextureViewDimension::D2),
            TextureSlot::Cube => Some(wgpu::TextureViewDimension::Cube),
        }
    }
}

/// Depth behaviour of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthMode {
    /// `Less`, writes depth.
    Standard,
    /// `LessEqual`, no depth writes; geometry sits on the far plane.
    Skybox,
}

/// Everything needed to build a [`ShaderProgram`].
#[derive(Debug, Clone)]
pub struct ProgramDescriptor {
    pub name: String,
    pub vertex_source: String,
    pub fragment_source: String,
    pub layout: UniformLayout,
    pub texture: TextureSlot,
    pub depth: DepthMode,
}

impl ProgramDescriptor {
    /// Read the two stage sources from disk.
    pub fn from_files(
        name: &str,
        vertex_path: &Path,
        fragment_path: &Path,
        layout: UniformLayout,
        texture: TextureSlot,
        depth: DepthMode,
    ) -> Result<Self, RendererError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| {
                RendererError::ResourceUnavailable(format!("shader {}: {e}", path.display()))
            })
        };
        Ok(Self {
            name: name.to_string(),
            vertex_source: read(vertex_path)?,
            fragment_source: read(fragment_path)?,
            layout,
            texture,
            depth,
        })
    }
}

/// Compiled vertex + fragment stages with one pipeline per [`PipelineKey`].
pub struct ShaderProgram {
    name: String,
    layout: Arc<UniformLayout>,
    texture: TextureSlot,
    bind_group_layout: wgpu::BindGroupLayout,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,
}

impl ShaderProgram {
    /// Compile both stages and prebuild every pipeline variant.
    ///
    /// Compile and validation errors are caught with an error scope and
    /// returned as [`RendererError::ResourceUnavailable`].
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        supports_wireframe: bool,
        descriptor: &ProgramDescriptor,
    ) -> Result<Self, RendererError> {
        let name = descriptor.name.as_str();
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{name} vertex shader")),
            source: wgpu::ShaderSource::Wgsl(descriptor.vertex_source.as_str().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{name} fragment shader")),
            source: wgpu::ShaderSource::Wgsl(descriptor.fragment_source.as_str().into()),
        });

        let bind_group_layout = create_bind_group_layout(device, name, descriptor);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{name} pipeline layout")),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let (depth_write_enabled, depth_compare) = match descriptor.depth {
            DepthMode::Standard => (true, wgpu::CompareFunction::Less),
            DepthMode::Skybox => (false, wgpu::CompareFunction::LessEqual),
        };

        let mut pipelines = HashMap::new();
        for key in PipelineKey::all() {
            if key.polygon == PolygonFill::Line && !supports_wireframe {
                continue;
            }
            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&format!("{name} pipeline [{}]", key.label())),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: color_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: key.cull_mode(),
                    unclipped_depth: false,
                    polygon_mode: key.polygon_mode(),
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_STENCIL_FORMAT,
                    depth_write_enabled,
                    depth_compare,
                    stencil: key.stencil_state(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });
            pipelines.insert(key, pipeline);
        }

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RendererError::ResourceUnavailable(format!(
                "shader program {name}: {error}"
            )));
        }

        tracing::debug!("Built shader program {name} ({} pipelines)", pipelines.len());

        Ok(Self {
            name: descriptor.name.clone(),
            layout: Arc::new(descriptor.layout.clone()),
            texture: descriptor.texture,
            bind_group_layout,
            pipelines,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &Arc<UniformLayout> {
        &self.layout
    }

    pub fn texture_slot(&self) -> TextureSlot {
        self.texture
    }

    /// Pipeline for `key`. Line variants fall back to fill when the device
    /// cannot rasterise lines.
    pub fn pipeline(&self, key: PipelineKey) -> Option<&wgpu::RenderPipeline> {
        self.pipelines
            .get(&key)
            .or_else(|| self.pipelines.get(&key.filled()))
    }

    /// Bind group for one uniform buffer plus the program's texture, if any.
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        uniforms: &wgpu::Buffer,
        texture: Option<&Texture>,
    ) -> wgpu::BindGroup {
        let mut entries = vec![wgpu::BindGroupEntry {
            binding: 0,
            resource: uniforms.as_entire_binding(),
        }];
        if let (Some(_), Some(texture)) = (self.texture.view_dimension(), texture) {
            entries.push(wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(texture.view()),
            });
            entries.push(wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(texture.sampler()),
            });
        }
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} / {} bind group", self.name)),
            layout: &self.bind_group_layout,
            entries: &entries,
        })
    }
}

fn create_bind_group_layout(
    device: &wgpu::Device,
    name: &str,
    descriptor: &ProgramDescriptor,
) -> wgpu::BindGroupLayout {
    let mut entries = vec![wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(descriptor.layout.size() as u64),
        },
        count: None,
    }];

    if let Some(view_dimension) = descriptor.texture.view_dimension() {
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension,
                multisampled: false,
            },
            count: None,
        });
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 2,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        });
    }

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{name} bind group layout")),
        entries: &entries,
    })
}
