//! Unit primitives the whole cab is built from.
//!
//! Both shapes are centred on the origin and fit the unit cube, so an
//! element's transform scale is its size in world units.

use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.vertices.len() as u16;
        self.vertices
            .extend(corners.iter().map(|&position| Vertex { position, normal }));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Cube spanning [-0.5, 0.5] on every axis, counter-clockwise faces.
pub fn unit_cube() -> MeshData {
    let mut mesh = MeshData::default();
    let h = 0.5;
    // +X
    mesh.push_quad([[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]], [1.0, 0.0, 0.0]);
    // -X
    mesh.push_quad([[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]], [-1.0, 0.0, 0.0]);
    // +Y
    mesh.push_quad([[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]], [0.0, 1.0, 0.0]);
    // -Y
    mesh.push_quad([[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]], [0.0, -1.0, 0.0]);
    // +Z
    mesh.push_quad([[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]], [0.0, 0.0, 1.0]);
    // -Z
    mesh.push_quad([[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]], [0.0, 0.0, -1.0]);
    mesh
}

/// Y-axis cylinder of diameter 1 and height 1 with capped ends.
pub fn unit_cylinder(segments: u16) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    let r = 0.5;
    let h = 0.5;
    let ring = |i: u16| {
        let a = TAU * i as f32 / segments as f32;
        (a.cos(), a.sin())
    };

    // side: two vertices per ring step, smooth normals
    for i in 0..=segments {
        let (c, s) = ring(i);
        let normal = [c, 0.0, s];
        mesh.vertices.push(Vertex { position: [r * c, -h, r * s], normal });
        mesh.vertices.push(Vertex { position: [r * c, h, r * s], normal });
    }
    for i in 0..segments {
        let b = i * 2;
        mesh.indices
            .extend_from_slice(&[b, b + 1, b + 3, b, b + 3, b + 2]);
    }

    // caps: centre vertex plus a ring each
    for (y, ny) in [(h, 1.0f32), (-h, -1.0f32)] {
        let centre = mesh.vertices.len() as u16;
        mesh.vertices.push(Vertex { position: [0.0, y, 0.0], normal: [0.0, ny, 0.0] });
        for i in 0..segments {
            let (c, s) = ring(i);
            mesh.vertices.push(Vertex { position: [r * c, y, r * s], normal: [0.0, ny, 0.0] });
        }
        for i in 0..segments {
            let a = centre + 1 + i;
            let b = centre + 1 + (i + 1) % segments;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[centre, b, a]);
            } else {
                mesh.indices.extend_from_slice(&[centre, a, b]);
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertices.len());
        }
        for v in &mesh.vertices {
            let n = glam::Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(v.position.iter().all(|c| c.abs() <= 0.5 + 1e-6));
        }
    }

    #[test]
    fn cube_is_well_formed() {
        let m = unit_cube();
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.indices.len(), 36);
        check(&m);
    }

    #[test]
    fn cylinder_is_well_formed() {
        let m = unit_cylinder(20);
        check(&m);
        assert_eq!(m.indices.len(), 20 * 6 + 2 * 20 * 3);
        check(&unit_cylinder(1));
    }
}
