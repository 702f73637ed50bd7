use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed UV sphere centred on the origin.
///
/// Rows run from the north pole (+Y) to the south pole; the degenerate
/// triangles touching each pole are skipped.
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(hs as usize + 1);

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let polar = v * PI;
            let mut row = Vec::with_capacity(ws as usize + 1);
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let azimuth = u * TAU;
                let position = [
                    -radius * azimuth.cos() * polar.sin(),
                    radius * polar.cos(),
                    radius * azimuth.sin() * polar.sin(),
                ];
                let len = (position[0] * position[0]
                    + position[1] * position[1]
                    + position[2] * position[2])
                    .sqrt();
                let normal = if len > 0.0 {
                    [position[0] / len, position[1] / len, position[2] / len]
                } else {
                    [0.0, 1.0, 0.0]
                };
                row.push(vertices.len() as u32);
                vertices.push(Vertex { position, normal });
            }
            grid.push(row);
        }

        let mut indices = Vec::with_capacity((ws * (2 * hs - 2) * 3) as usize);
        for iy in 0..hs as usize {
            for ix in 0..ws as usize {
                let a = grid[iy][ix + 1];
                let b = grid[iy][ix];
                let c = grid[iy + 1][ix];
                let d = grid[iy + 1][ix + 1];
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs as usize - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
