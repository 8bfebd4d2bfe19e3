use std::path::{Path, PathBuf};

use crate::gpu::RendererError;
use crate::uniforms::UniformLayout;

use super::builtin::BuiltinProgram;
use super::program::{DepthMode, ProgramDescriptor, ShaderProgram, TextureSlot};

/// Opaque handle to a program in a [`ShaderLibrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(usize);

/// Owns every compiled program; objects refer to them by [`ProgramId`].
pub struct ShaderLibrary {
    color_format: wgpu::TextureFormat,
    supports_wireframe: bool,
    programs: Vec<ShaderProgram>,
}

impl ShaderLibrary {
    pub fn new(color_format: wgpu::TextureFormat, supports_wireframe: bool) -> Self {
        Self {
            color_format,
            supports_wireframe,
            programs: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        device: &wgpu::Device,
        descriptor: &ProgramDescriptor,
    ) -> Result<ProgramId, RendererError> {
        let program = ShaderProgram::new(
            device,
            self.color_format,
            self.supports_wireframe,
            descriptor,
        )?;
        self.programs.push(program);
        Ok(ProgramId(self.programs.len() - 1))
    }

    /// Compile a program from a vertex and a fragment source file.
    #[allow(clippy::too_many_arguments)]
    pub fn load_files(
        &mut self,
        device: &wgpu::Device,
        name: &str,
        vertex_path: &Path,
        fragment_path: &Path,
        layout: UniformLayout,
        texture: TextureSlot,
        depth: DepthMode,
    ) -> Result<ProgramId, RendererError> {
        let descriptor =
            ProgramDescriptor::from_files(name, vertex_path, fragment_path, layout, texture, depth)?;
        self.add(device, &descriptor)
    }

    pub fn load_builtin(
        &mut self,
        device: &wgpu::Device,
        program: BuiltinProgram,
    ) -> Result<ProgramId, RendererError> {
        self.add(device, &program.descriptor())
    }

    /// Load `<dir>/<name>.vert.wgsl` and `<dir>/<name>.frag.wgsl` when both
    /// exist, keeping the built-in layout. Anything else, including a failed
    /// override, uses the embedded shaders.
    pub fn load_builtin_or_override(
        &mut self,
        device: &wgpu::Device,
        program: BuiltinProgram,
        shader_dir: Option<&Path>,
    ) -> Result<ProgramId, RendererError> {
        if let Some((vertex, fragment)) = shader_dir.and_then(|dir| override_paths(dir, program)) {
            match self.load_files(
                device,
                program.name(),
                &vertex,
                &fragment,
                program.layout(),
                program.texture_slot(),
                program.depth_mode(),
            ) {
                Ok(id) => {
                    tracing::info!(
                        "Loaded {} shaders from {}",
                        program.name(),
                        vertex.display()
                    );
                    return Ok(id);
                }
                Err(e) => {
                    tracing::warn!(
                        "Shader override for {} failed, using built-in: {e}",
                        program.name()
                    );
                }
            }
        }
        self.load_builtin(device, program)
    }

    /// `None` for a handle this library never issued.
    pub fn get(&self, id: ProgramId) -> Option<&ShaderProgram> {
        self.programs.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

fn override_paths(dir: &Path, program: BuiltinProgram) -> Option<(PathBuf, PathBuf)> {
    let vertex = dir.join(format!("{}.vert.wgsl", program.name()));
    let fragment = dir.join(format!("{}.frag.wgsl", program.name()));
    (vertex.is_file() && fragment.is_file()).then_some((vertex, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_requires_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        assert!(override_paths(dir.path(), BuiltinProgram::Phong).is_none());

        std::fs::write(dir.path().join("phong.vert.wgsl"), "").unwrap();
        assert!(override_paths(dir.path(), BuiltinProgram::Phong).is_none());

        std::fs::write(dir.path().join("phong.frag.wgsl"), "").unwrap();
        let (vert, frag) = override_paths(dir.path(), BuiltinProgram::Phong).unwrap();
        assert!(vert.ends_with("phong.vert.wgsl"));
        assert!(frag.ends_with("phong.frag.wgsl"));
        assert!(override_paths(dir.path(), BuiltinProgram::Skybox).is_none());
    }

    #[test]
    fn unknown_program_id_resolves_to_none() {
        let library = ShaderLibrary::new(wgpu::TextureFormat::Bgra8UnormSrgb, false);
        assert!(library.is_empty());
        assert!(library.get(ProgramId(3)).is_none());
    }
}
