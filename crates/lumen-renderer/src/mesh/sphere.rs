//! UV sphere generation.
//!
//! `fidelity` rings of `fidelity` points each. Ring and column indices wrap
//! modulo `fidelity`, so the last ring is stitched to the first through the
//! index buffer; seam vertices are never welded.

use std::f32::consts::PI;

use super::{Mesh, Vertex};
use crate::gpu::RendererError;

/// Generate a sphere of `radius` with `fidelity²` vertices and
/// `6 · fidelity²` indices.
///
/// For ring `i` and point `j`:
/// `theta = j·π/(f-1)`, `phi = i·2π/(f-1)`,
/// `d = (cos φ · sin θ, cos θ, sin φ · sin θ)`, position `d·radius`,
/// texcoord `(i/(f-1), 1 - j/(f-1))`, normal `d`.
pub fn generate_sphere(radius: f32, fidelity: u32) -> Result<Mesh, RendererError> {
    if fidelity < 2 {
        return Err(RendererError::InvalidArgument(format!(
            "sphere fidelity must be at least 2, got {fidelity}"
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RendererError::InvalidArgument(format!(
            "sphere radius must be positive, got {radius}"
        )));
    }

    let f = fidelity as usize;
    let steps = (fidelity - 1) as f32;

    let mut vertices = Vec::with_capacity(f * f);
    for i in 0..f {
        let phi = i as f32 * 2.0 * PI / steps;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..f {
            let theta = j as f32 * PI / steps;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let d = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            vertices.push(Vertex::new(
                [d[0] * radius, d[1] * radius, d[2] * radius],
                [i as f32 / steps, 1.0 - j as f32 / steps],
                d,
            ));
        }
    }

    let mut indices = Vec::with_capacity(f * f * 6);
    for i in 0..f {
        let next_i = (i + 1) % f;
        for j in 0..f {
            let next_j = (j + 1) % f;
            let idx = |ring: usize, point: usize| (ring * f + point) as u32;

            indices.extend_from_slice(&[idx(next_i, next_j), idx(i, j), idx(next_i, j)]);
            indices.extend_from_slice(&[idx(i, next_j), idx(i, j), idx(next_i, next_j)]);
        }
    }

    Ok(Mesh::new(vertices, indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn counts_for_many_fidelities() {
        for f in [2u32, 3, 7, 16, 50] {
            let mesh = generate_sphere(1.5, f).unwrap();
            let n = (f * f) as usize;
            assert_eq!(mesh.vertices.len(), n, "fidelity {f}");
            assert_eq!(mesh.indices.len(), 6 * n, "fidelity {f}");
            assert!(mesh.validate_indices().is_ok(), "fidelity {f}");
        }
    }

    #[test]
    fn vertices_lie_on_radius() {
        let radius = 0.7;
        let mesh = generate_sphere(radius, 50).unwrap();
        for (k, v) in mesh.vertices.iter().enumerate() {
            assert!(
                (length(v.position) - radius).abs() < EPS,
                "vertex {k}: |p| = {}",
                length(v.position)
            );
        }
    }

    #[test]
    fn normals_are_unit_and_match_position() {
        let radius = 2.5;
        let mesh = generate_sphere(radius, 13).unwrap();
        for v in &mesh.vertices {
            assert!((length(v.normal) - 1.0).abs() < EPS);
            for axis in 0..3 {
                assert!((v.normal[axis] - v.position[axis] / radius).abs() < EPS);
            }
        }
    }

    #[test]
    fn degenerate_fidelity_is_rejected() {
        assert!(matches!(
            generate_sphere(1.0, 0),
            Err(RendererError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_sphere(1.0, 1),
            Err(RendererError::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(matches!(
            generate_sphere(0.0, 10),
            Err(RendererError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_sphere(f32::NAN, 10),
            Err(RendererError::InvalidArgument(_))
        ));
    }

    #[test]
    fn first_vertex_is_the_pole() {
        let mesh = generate_sphere(1.0, 2).unwrap();
        let v = mesh.vertices[0];
        assert!(v.position[0].abs() < EPS);
        assert!((v.position[1] - 1.0).abs() < EPS);
        assert!(v.position[2].abs() < EPS);
        assert_eq!(v.texcoord, [0.0, 1.0]);
    }

    #[test]
    fn fidelity_two_ring_layout() {
        // f = 2: theta in {0, π}, phi in {0, 2π}
        let mesh = generate_sphere(1.0, 2).unwrap();
        let south = mesh.vertices[1].position;
        assert!((south[1] + 1.0).abs() < EPS);
        assert_eq!(mesh.vertices[3].texcoord, [1.0, 0.0]);
    }

    #[test]
    fn first_cell_winding() {
        let f = 4u32;
        let mesh = generate_sphere(1.0, f).unwrap();
        // cell (0, 0): ((1)*f + 1, 0, 1*f) and (1, 0, 1*f + 1)
        assert_eq!(&mesh.indices[0..6], &[f + 1, 0, f, 1, 0, f + 1]);
    }

    #[test]
    fn last_cell_wraps_to_first_ring() {
        let f = 5u32;
        let mesh = generate_sphere(1.0, f).unwrap();
        let last = (f * f - 1) as usize;
        let cell = &mesh.indices[last * 6..last * 6 + 6];
        // i = j = f-1: next ring and next column both wrap to 0
        let here = f * f - 1;
        assert_eq!(cell, &[0, here, f - 1, (f - 1) * f, here, 0]);
    }

    #[test]
    fn surface_is_closed() {
        use std::collections::HashMap;

        for f in [3u32, 7, 50] {
            let mesh = generate_sphere(1.0, f).unwrap();
            let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
            for tri in mesh.indices.chunks_exact(3) {
                for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                    *edges.entry((a.min(b), a.max(b))).or_default() += 1;
                }
            }
            let open: Vec<_> = edges.iter().filter(|(_, n)| **n != 2).collect();
            assert!(open.is_empty(), "fidelity {f}: edges not shared by two triangles: {open:?}");
            assert_eq!(edges.len(), 3 * (f * f) as usize, "fidelity {f}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_sphere(0.8, 20).unwrap();
        let b = generate_sphere(0.8, 20).unwrap();
        assert_eq!(a, b);
    }
}
