use std::path::Path;

use crate::gpu::RendererError;

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// A single opaque black pixel.
    pub fn black() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0, 255],
        }
    }

    /// Reject images the device cannot hold in a single texture.
    pub fn check_max_dimension(&self, max: u32, label: &str) -> Result<(), RendererError> {
        if self.width > max || self.height > max {
            return Err(RendererError::ResourceUnavailable(format!(
                "{label}: {}x{} exceeds the device texture limit of {max}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Decode any format the `image` crate understands into RGBA8.
///
/// 2D textures are flipped so that row 0 is the bottom of the image, which
/// matches the `v` direction of the generated meshes. Cubemap faces are
/// loaded unflipped.
pub fn decode_rgba(path: &Path, flip_vertically: bool) -> Result<DecodedImage, RendererError> {
    let image = image::open(path).map_err(|e| {
        RendererError::ResourceUnavailable(format!("{}: {e}", path.display()))
    })?;
    let image = if flip_vertically { image.flipv() } else { image };
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(RendererError::ResourceUnavailable(format!(
            "{}: image has no pixels",
            path.display()
        )));
    }
    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Decode six cubemap faces (+X, -X, +Y, -Y, +Z, -Z). All faces must share
/// one square size.
pub fn decode_cube_faces(paths: &[impl AsRef<Path>; 6]) -> Result<Vec<DecodedImage>, RendererError> {
    let faces = paths
        .iter()
        .map(|p| decode_rgba(p.as_ref(), false))
        .collect::<Result<Vec<_>, _>>()?;

    let (width, height) = (faces[0].width, faces[0].height);
    if width != height {
        return Err(RendererError::ResourceUnavailable(format!(
            "cubemap face is {width}x{height}, faces must be square"
        )));
    }
    if let Some((i, face)) = faces
        .iter()
        .enumerate()
        .find(|(_, f)| f.width != width || f.height != height)
    {
        return Err(RendererError::ResourceUnavailable(format!(
            "cubemap face {i} is {}x{}, expected {width}x{height}",
            face.width, face.height
        )));
    }
    Ok(faces)
}
