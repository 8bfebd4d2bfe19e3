use std::path::Path;

use wgpu::util::DeviceExt;

use crate::gpu::RendererError;
use crate::shader::TextureSlot;

use super::decode::{decode_cube_faces, decode_rgba, DecodedImage};

const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// A sampled GPU texture: either a 2D image or a six-face cubemap.
pub struct Texture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    slot: TextureSlot,
}

impl Texture {
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// [`TextureSlot::D2`] or [`TextureSlot::Cube`].
    pub fn slot(&self) -> TextureSlot {
        self.slot
    }

    pub fn load_2d(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, RendererError> {
        let image = decode_rgba(path, true)?;
        let label = path.display().to_string();
        image.check_max_dimension(device.limits().max_texture_dimension_2d, &label)?;
        Ok(Self::from_layers(device, queue, &label, &[image], TextureSlot::D2))
    }

    pub fn load_cube(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        paths: &[impl AsRef<Path>; 6],
    ) -> Result<Self, RendererError> {
        let faces = decode_cube_faces(paths)?;
        // Faces share one square size.
        faces[0].check_max_dimension(device.limits().max_texture_dimension_2d, "skybox")?;
        Ok(Self::from_layers(device, queue, "skybox", &faces, TextureSlot::Cube))
    }

    pub fn fallback_2d(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_layers(
            device,
            queue,
            "fallback_2d",
            &[DecodedImage::black()],
            TextureSlot::D2,
        )
    }

    pub fn fallback_cube(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let faces: Vec<_> = (0..6).map(|_| DecodedImage::black()).collect();
        Self::from_layers(device, queue, "fallback_cube", &faces, TextureSlot::Cube)
    }

    /// Layers must all share the first layer's size; callers decode through
    /// [`decode_cube_faces`], which guarantees it.
    fn from_layers(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        layers: &[DecodedImage],
        slot: TextureSlot,
    ) -> Self {
        let (width, height) = (layers[0].width, layers[0].height);
        let data: Vec<u8> = layers
            .iter()
            .flat_map(|layer| layer.pixels.iter().copied())
            .collect();

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: layers.len() as u32,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: TEXTURE_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &data,
        );

        let view_dimension = match slot {
            TextureSlot::Cube => wgpu::TextureViewDimension::Cube,
            _ => wgpu::TextureViewDimension::D2,
        };
        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            dimension: Some(view_dimension),
            ..Default::default()
        });

        let address_mode = match slot {
            TextureSlot::Cube => wgpu::AddressMode::ClampToEdge,
            _ => wgpu::AddressMode::Repeat,
        };
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        tracing::debug!(label, width, height, layers = layers.len(), "Texture uploaded");

        Self {
            view,
            sampler,
            slot,
        }
    }
}
