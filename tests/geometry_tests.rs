// Host-side tests for UV sphere generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;

fn len(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn scene_sphere_has_expected_counts() {
    let mesh = SphereMesh::new(3.0, 64, 64);
    assert_eq!(mesh.vertices.len(), 65 * 65);
    assert_eq!(mesh.indices.len(), 3 * 64 * (2 * 64 - 2));
    assert_eq!(mesh.index_count() as usize, mesh.indices.len());
}

#[test]
fn vertices_lie_on_the_sphere_with_unit_normals() {
    let mesh = SphereMesh::new(3.0, 16, 12);
    for v in &mesh.vertices {
        assert!((len(v.position) - 3.0).abs() < 1e-4);
        assert!((len(v.normal) - 1.0).abs() < 1e-4);
        let dot = v.position[0] * v.normal[0]
            + v.position[1] * v.normal[1]
            + v.position[2] * v.normal[2];
        assert!((dot - 3.0).abs() < 1e-3, "normal points outward");
    }
    assert!((mesh.vertices[0].position[1] - 3.0).abs() < 1e-5);
    assert!((mesh.vertices.last().unwrap().position[1] + 3.0).abs() < 1e-5);
}

#[test]
fn indices_stay_in_range_and_skip_pole_slivers() {
    let mesh = SphereMesh::new(1.0, 8, 6);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
    for tri in mesh.indices.chunks(3) {
        assert_eq!(tri.len(), 3);
        assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
    }
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let mesh = SphereMesh::new(1.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert!(!mesh.indices.is_empty());
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let mesh = SphereMesh::new(1.0, 4, 3);
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
    assert_eq!(bytes.len(), mesh.vertices.len() * 24);
}
