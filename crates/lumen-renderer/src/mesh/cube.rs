//! Axis-aligned cube with per-face normals, used for the skybox.

use super::{Mesh, Vertex};

/// Generate a cube centred at the origin: 24 vertices and 36 indices.
///
/// Faces wind counter-clockwise seen from outside. The skybox pipeline
/// draws without culling, so the same mesh works from inside.
pub fn generate_cube(half_extent: f32) -> Mesh {
    let h = half_extent;
    // (normal, tangent u, tangent v) per face; corners are n ± u ± v
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let corners = [
        (-1.0, -1.0, [0.0, 0.0]),
        (1.0, -1.0, [1.0, 0.0]),
        (1.0, 1.0, [1.0, 1.0]),
        (-1.0, 1.0, [0.0, 1.0]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv, uv) in corners {
            let position = [
                (normal[0] + su * u[0] + sv * v[0]) * h,
                (normal[1] + su * u[1] + sv * v[1]) * h,
                (normal[2] + su * u[2] + sv * v[2]) * h,
            ];
            vertices.push(Vertex::new(position, uv, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(vertices, indices)
}
