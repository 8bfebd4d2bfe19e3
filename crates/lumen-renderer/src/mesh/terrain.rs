//! Heightmapped terrain grid.

use std::path::Path;

use super::{Mesh, Vertex};
use crate::gpu::RendererError;

/// A grid of height samples, row-major, `width × depth`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: u32,
    depth: u32,
    heights: Vec<f32>,
}

impl Heightmap {
    /// A heightmap of zeros.
    pub fn flat(width: u32, depth: u32) -> Self {
        let width = width.max(1);
        let depth = depth.max(1);
        Self {
            width,
            depth,
            heights: vec![0.0; (width * depth) as usize],
        }
    }

    pub fn from_heights(width: u32, depth: u32, heights: Vec<f32>) -> Result<Self, RendererError> {
        if width == 0 || depth == 0 || heights.len() != (width * depth) as usize {
            return Err(RendererError::InvalidArgument(format!(
                "heightmap {width}x{depth} needs {} samples, got {}",
                width as u64 * depth as u64,
                heights.len()
            )));
        }
        Ok(Self {
            width,
            depth,
            heights,
        })
    }

    /// Decode a greyscale image; luminance `[0, 1]` is scaled by `height_scale`.
    pub fn from_image(path: &Path, height_scale: f32) -> Result<Self, RendererError> {
        let img = image::open(path).map_err(|e| {
            RendererError::ResourceUnavailable(format!("{}: {e}", path.display()))
        })?;
        let luma = img.to_luma8();
        let (width, depth) = luma.dimensions();
        let heights = luma
            .pixels()
            .map(|p| p.0[0] as f32 / 255.0 * height_scale)
            .collect();
        Self::from_heights(width, depth, heights)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.depth)
    }

    /// Nearest sample at normalised coordinates `u, v ∈ [0, 1]`.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let x = (u.clamp(0.0, 1.0) * (self.width - 1) as f32).round() as u32;
        let z = (v.clamp(0.0, 1.0) * (self.depth - 1) as f32).round() as u32;
        self.heights[(z * self.width + x) as usize]
    }
}

/// Generate a `cells × cells` grid spanning `size × size` on the XZ plane,
/// starting at the origin, with heights from `heights`.
///
/// Produces `(cells + 1)²` vertices and `6 · cells²` indices. Normals come
/// from central differences of neighbouring heights.
pub fn generate_terrain(cells: u32, size: f32, heights: &Heightmap) -> Result<Mesh, RendererError> {
    if cells == 0 {
        return Err(RendererError::InvalidArgument("terrain needs at least one cell".into()));
    }
    if !(size.is_finite() && size > 0.0) {
        return Err(RendererError::InvalidArgument(format!(
            "terrain size must be positive, got {size}"
        )));
    }

    let n = cells + 1;
    let step = size / cells as f32;
    let height_at = |x: u32, z: u32| {
        heights.sample(x as f32 / cells as f32, z as f32 / cells as f32)
    };

    let mut vertices = Vec::with_capacity((n * n) as usize);
    for z in 0..n {
        for x in 0..n {
            let left = height_at(x.saturating_sub(1), z);
            let right = height_at((x + 1).min(cells), z);
            let back = height_at(x, z.saturating_sub(1));
            let front = height_at(x, (z + 1).min(cells));

            let nx = left - right;
            let nz = back - front;
            let ny = 2.0 * step;
            let len = (nx * nx + ny * ny + nz * nz).sqrt();

            vertices.push(Vertex::new(
                [x as f32 * step, height_at(x, z), z as f32 * step],
                [x as f32 / cells as f32, z as f32 / cells as f32],
                [nx / len, ny / len, nz / len],
            ));
        }
    }

    let mut indices = Vec::with_capacity((cells * cells * 6) as usize);
    for z in 0..cells {
        for x in 0..cells {
            let top_left = z * n + x;
            let top_right = top_left + 1;
            let bottom_left = top_left + n;
            let bottom_right = bottom_left + 1;
            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    Ok(Mesh::new(vertices, indices))
}
