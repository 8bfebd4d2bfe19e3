//! The demo scene: lights, toggles and every drawable, owned in one place.

mod placement;
mod skybox;
mod toggles;

use std::path::PathBuf;

use glam::{Mat4, Vec3, Vec4};
use lumen_common::{Action, Color};
use lumen_config::LumenConfig;

use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::lighting::LightingState;
use crate::mesh::{generate_sphere, generate_terrain, Heightmap};
use crate::object::{DrawContext, FrameUniforms, RenderableObject};
use crate::shader::{BuiltinProgram, ProgramId, ShaderLibrary, StencilMode, STENCIL_REFERENCE};
use crate::texture::TextureLibrary;

pub use placement::{ball_positions, placement_rng};
pub use skybox::Skybox;
pub use toggles::RenderToggles;

/// Camera matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub view_projection: Mat4,
    /// `projection * view` with the view translation removed.
    pub skybox_view_projection: Mat4,
    pub position: Vec3,
}

/// Handles of the programs the scene draws with.
#[derive(Debug, Clone, Copy)]
pub struct ScenePrograms {
    pub phong: ProgramId,
    pub directional: ProgramId,
    pub reflection: ProgramId,
    pub fixed_color: ProgramId,
    pub skybox: ProgramId,
}

impl ScenePrograms {
    fn load(
        library: &mut ShaderLibrary,
        device: &wgpu::Device,
        shader_dir: Option<PathBuf>,
    ) -> Result<Self, RendererError> {
        let dir = shader_dir.as_deref();
        let mut load = |program| library.load_builtin_or_override(device, program, dir);
        Ok(Self {
            phong: load(BuiltinProgram::Phong)?,
            directional: load(BuiltinProgram::Directional)?,
            reflection: load(BuiltinProgram::Reflection)?,
            fixed_color: load(BuiltinProgram::FixedColor)?,
            skybox: load(BuiltinProgram::Skybox)?,
        })
    }
}

/// A ball and the enlarged copy drawn behind it as its outline.
struct Ball {
    body: RenderableObject,
    outline: RenderableObject,
}

pub struct Scene {
    lighting: LightingState,
    toggles: RenderToggles,
    scissor: lumen_common::ScissorRect,
    clear_color: wgpu::Color,
    programs: ScenePrograms,
    library: ShaderLibrary,
    textures: TextureLibrary,
    balls: Vec<Ball>,
    mirror: Option<RenderableObject>,
    terrain: Option<RenderableObject>,
    skybox: Skybox,
    frame: FrameUniforms,
}

impl Scene {
    /// Compile programs, load textures and build every object.
    ///
    /// Missing textures fall back to black; degenerate geometry settings
    /// are errors.
    pub fn build(gpu: &GpuContext, config: &LumenConfig) -> Result<Self, RendererError> {
        let device = &gpu.device;
        let queue = &gpu.queue;
        let assets = &config.assets;
        let scene = &config.scene;

        let mut library = ShaderLibrary::new(gpu.format(), gpu.supports_wireframe);
        let shader_dir = assets.shader_dir.as_deref().map(|dir| assets.resolve(dir));
        let programs = ScenePrograms::load(&mut library, device, shader_dir)?;

        let mut textures = TextureLibrary::new(device, queue);
        let ball_texture =
            textures.load_2d_or_fallback(device, queue, &assets.resolve(&assets.ball_texture));
        let terrain_texture =
            textures.load_2d_or_fallback(device, queue, &assets.resolve(&assets.terrain_texture));
        let cubemap = textures.load_cube_or_fallback(device, queue, &assets.skybox_paths());

        let shininess = config.render.shininess;

        let ball_mesh = generate_sphere(scene.ball_radius, scene.fidelity)?;
        let outline_mesh = generate_sphere(scene.outline_radius, scene.fidelity)?;
        let [r, g, b] = scene.outline_color;
        let outline_color = Vec4::new(r, g, b, 1.0);

        let mut rng = placement_rng(scene.seed);
        let balls = ball_positions(scene.ball_count as usize, &mut rng)
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                let mut body =
                    RenderableObject::new(device, &format!("ball {i}"), &ball_mesh, ball_texture);
                let mut outline = RenderableObject::new(
                    device,
                    &format!("ball {i} outline"),
                    &outline_mesh,
                    None,
                );
                for object in [&mut body, &mut outline] {
                    object.set_position(position);
                    object.set_rotation_step(scene.rotation_step_degrees);
                    object.set_shininess(shininess);
                }
                outline.set_color(outline_color);
                Ball { body, outline }
            })
            .collect::<Vec<_>>();

        let mirror = if scene.mirror.enabled {
            let mesh = generate_sphere(scene.mirror.radius, scene.fidelity)?;
            let mut mirror = RenderableObject::new(device, "mirror", &mesh, cubemap);
            mirror.set_position(Vec3::from(scene.mirror.position));
            mirror.set_rotation_step(scene.rotation_step_degrees);
            mirror.set_shininess(shininess);
            Some(mirror)
        } else {
            None
        };

        let terrain = if config.terrain.enabled {
            let heightmap = load_heightmap(config);
            let mesh = generate_terrain(config.terrain.cells, config.terrain.size, &heightmap)?;
            let mut terrain = RenderableObject::new(device, "terrain", &mesh, terrain_texture);
            terrain.set_position(Vec3::from(config.terrain.position));
            terrain.set_rotation_step(0.0);
            terrain.set_shininess(shininess);
            Some(terrain)
        } else {
            None
        };

        let skybox = Skybox::new(device, cubemap);

        let clear_color = Color::from_hex(&config.render.clear_color)
            .map(|c| {
                let [r, g, b, a] = c.to_linear_rgba();
                wgpu::Color { r, g, b, a }
            })
            .unwrap_or(wgpu::Color {
                r: 1.0,
                g: 0.0,
                b: 1.0,
                a: 1.0,
            });

        tracing::info!(
            balls = balls.len(),
            mirror = mirror.is_some(),
            terrain = terrain.is_some(),
            programs = library.len(),
            textures = textures.len(),
            "Scene built"
        );

        Ok(Self {
            lighting: LightingState::from_config(&config.lighting),
            toggles: RenderToggles::default(),
            scissor: config.render.scissor,
            clear_color,
            programs,
            library,
            textures,
            balls,
            mirror,
            terrain,
            skybox,
            frame: FrameUniforms::default(),
        })
    }

    pub fn lighting(&self) -> &LightingState {
        &self.lighting
    }

    pub fn toggles(&self) -> RenderToggles {
        self.toggles
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Apply a toggle action. Returns `false` if `action` is not a toggle.
    pub fn apply(&mut self, action: Action) -> bool {
        if !self.toggles.apply(action) {
            return false;
        }
        // Culling is a per-ball setting; terrain, mirror and outlines draw both faces.
        for ball in &mut self.balls {
            ball.body.set_face_culling(self.toggles.face_culling);
        }
        tracing::debug!(?action, toggles = ?self.toggles, "Render toggles changed");
        true
    }

    /// Advance every object by one step and cache its matrices.
    pub fn update(&mut self, dt: f32, camera: &CameraView) {
        self.frame.camera_pos = camera.position;
        self.frame.time += dt;

        let vp = camera.view_projection;
        if let Some(terrain) = &mut self.terrain {
            terrain.update(dt, vp);
        }
        if let Some(mirror) = &mut self.mirror {
            mirror.update(dt, vp);
        }
        self.skybox.update(dt, camera.skybox_view_projection);
        for ball in &mut self.balls {
            ball.body.update(dt, vp);
            ball.outline.update(dt, vp);
        }
    }

    /// Record every draw into `pass`, whose target is `target` pixels.
    ///
    /// Order: terrain, mirror, skybox, then each ball followed by its outline.
    /// The scissor rectangle only clips the balls.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pass: &mut wgpu::RenderPass<'_>,
        target: PhysicalSize,
    ) {
        let Self {
            lighting,
            toggles,
            scissor,
            programs,
            library,
            textures,
            balls,
            mirror,
            terrain,
            skybox,
            frame,
            ..
        } = self;

        pass.set_stencil_reference(STENCIL_REFERENCE);

        let mut draw = DrawContext {
            device,
            queue,
            pass,
            programs: library,
            textures,
            frame: *frame,
            polygon: toggles.polygon(),
            stencil: StencilMode::Disabled,
        };

        if let Some(terrain) = terrain {
            terrain.render(&mut draw, lighting, programs.directional);
        }
        if let Some(mirror) = mirror {
            mirror.render(&mut draw, lighting, programs.reflection);
        }
        skybox.render(&mut draw, lighting, programs.skybox);

        if toggles.scissor {
            match scissor.to_top_left(target.width, target.height) {
                Some((x, y, width, height)) => draw.pass.set_scissor_rect(x, y, width, height),
                None => {
                    tracing::trace!("Scissor rectangle outside target, skipping balls");
                    return;
                }
            }
        }

        for ball in balls.iter_mut() {
            draw.stencil = toggles.ball_stencil();
            ball.body.render(&mut draw, lighting, programs.phong);
            if toggles.stencil {
                draw.stencil = StencilMode::Outline;
                ball.outline.render(&mut draw, lighting, programs.fixed_color);
            }
        }

        if toggles.scissor {
            draw.pass.set_scissor_rect(0, 0, target.width, target.height);
        }
    }
}

fn load_heightmap(config: &LumenConfig) -> Heightmap {
    let flat = || Heightmap::flat(2, 2);
    let relative = &config.assets.terrain_heightmap;
    if relative.is_empty() {
        return flat();
    }
    let path = config.assets.resolve(relative);
    match Heightmap::from_image(&path, config.terrain.height_scale) {
        Ok(heightmap) => heightmap,
        Err(e) => {
            tracing::warn!("Heightmap load failed, using flat terrain: {e}");
            flat()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_valid_meshes() {
        let config = LumenConfig::default();
        let ball = generate_sphere(config.scene.ball_radius, config.scene.fidelity).unwrap();
        let outline = generate_sphere(config.scene.outline_radius, config.scene.fidelity).unwrap();
        assert_eq!(ball.vertices.len(), outline.vertices.len());
        assert!(config.scene.outline_radius > config.scene.ball_radius);

        let terrain = generate_terrain(
            config.terrain.cells,
            config.terrain.size,
            &load_heightmap(&config),
        )
        .unwrap();
        terrain.validate_indices().unwrap();
    }

    #[test]
    fn missing_heightmap_falls_back_to_flat() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LumenConfig::default();
        config.assets.root = dir.path().display().to_string();
        config.assets.terrain_heightmap = "missing.png".into();

        let heightmap = load_heightmap(&config);
        assert_eq!(heightmap.dimensions(), (2, 2));
        assert_eq!(heightmap.sample(0.5, 0.5), 0.0);
    }

    #[test]
    fn default_scissor_fits_default_window() {
        let config = LumenConfig::default();
        let rect = config
            .render
            .scissor
            .to_top_left(config.window.width, config.window.height);
        assert_eq!(rect, Some((200, 200, 400, 400)));
    }
}
