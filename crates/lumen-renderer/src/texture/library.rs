use std::path::Path;

use crate::shader::TextureSlot;

use super::gpu::Texture;

/// Handle to a texture owned by a [`TextureLibrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

/// Owns loaded textures plus one black fallback per dimension.
///
/// Loads never fail outright: a missing or undecodable file is logged and
/// the handle points at the fallback instead.
pub struct TextureLibrary {
    textures: Vec<Texture>,
    fallback_2d: Texture,
    fallback_cube: Texture,
}

impl TextureLibrary {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self {
            textures: Vec::new(),
            fallback_2d: Texture::fallback_2d(device, queue),
            fallback_cube: Texture::fallback_cube(device, queue),
        }
    }

    pub fn insert(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    /// `None` means the fallback is in use.
    pub fn load_2d_or_fallback(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Option<TextureId> {
        match Texture::load_2d(device, queue, path) {
            Ok(texture) => Some(self.insert(texture)),
            Err(e) => {
                tracing::warn!("Texture load failed, using black fallback: {e}");
                None
            }
        }
    }

    pub fn load_cube_or_fallback(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        paths: &[impl AsRef<Path>; 6],
    ) -> Option<TextureId> {
        match Texture::load_cube(device, queue, paths) {
            Ok(texture) => Some(self.insert(texture)),
            Err(e) => {
                tracing::warn!("Cubemap load failed, using black fallback: {e}");
                None
            }
        }
    }

    /// Texture to bind for a program expecting `slot`.
    ///
    /// A missing handle, an unknown handle, or a handle of the wrong
    /// dimension resolves to the matching fallback. Programs without a
    /// texture slot get `None`.
    pub fn resolve(&self, id: Option<TextureId>, slot: TextureSlot) -> Option<&Texture> {
        let fallback = match slot {
            TextureSlot::None => return None,
            TextureSlot::D2 => &self.fallback_2d,
            TextureSlot::Cube => &self.fallback_cube,
        };
        let found = id
            .and_then(|id| self.textures.get(id.0))
            .filter(|t| t.slot() == slot);
        Some(found.unwrap_or(fallback))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
