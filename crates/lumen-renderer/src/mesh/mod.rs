//! CPU-side geometry: vertex type, generators, and GPU upload.

mod buffer;
mod cube;
mod sphere;
mod terrain;
mod vertex;

pub use buffer::GpuMesh;
pub use cube::generate_cube;
pub use sphere::generate_sphere;
pub use terrain::{generate_terrain, Heightmap};
pub use vertex::Vertex;

use crate::gpu::RendererError;

/// Immutable indexed triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check that the index list is whole triangles referencing real vertices.
    pub fn validate_indices(&self) -> Result<(), RendererError> {
        if self.indices.len() % 3 != 0 {
            return Err(RendererError::InvalidArgument(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        let count = self.vertices.len();
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(RendererError::InvalidArgument(format!(
                "index {bad} out of range for {count} vertices"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Mesh {
        let v = Vertex::new([0.0; 3], [0.0; 2], [0.0, 1.0, 0.0]);
        Mesh::new(vec![v; 3], vec![0, 1, 2])
    }

    #[test]
    fn vertex_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(Vertex::LAYOUT.array_stride, 32);
    }

    #[test]
    fn vertex_bytemuck_cast() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.5, 0.5], [0.0, 1.0, 0.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.5, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn valid_mesh_passes() {
        let mesh = tri();
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.validate_indices().is_ok());
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut mesh = tri();
        mesh.indices[2] = 3;
        assert!(mesh.validate_indices().is_err());
    }

    #[test]
    fn partial_triangle_fails() {
        let mut mesh = tri();
        mesh.indices.push(0);
        assert!(mesh.validate_indices().is_err());
    }
}
