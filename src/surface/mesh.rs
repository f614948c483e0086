//! Rectangular grid mesh with individually addressable vertices.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;

use crate::params::SurfaceParams;

/// Vertex data for the surface mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Flat grid in the XY plane, displaced along Z
///
/// Vertices are stored row-major starting from the top row. The index of a
/// vertex is its only identity and never changes.
pub struct Grid {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Grid {
    /// Create a grid and give every vertex a random Z offset in [0, max_offset)
    pub fn new<R: Rng>(params: &SurfaceParams, rng: &mut R) -> Self {
        let (cols, rows) = (params.cols, params.rows);
        let half_w = params.width / 2.0;
        let half_h = params.height / 2.0;
        let seg_w = params.width / cols as f32;
        let seg_h = params.height / rows as f32;

        let mut vertices = Vec::with_capacity(params.vertex_count());
        let mut indices = Vec::with_capacity(cols * rows * 6);

        for iy in 0..=rows {
            let y = half_h - iy as f32 * seg_h;
            for ix in 0..=cols {
                let x = ix as f32 * seg_w - half_w;
                vertices.push(Vertex {
                    position: [x, y, 0.0],
                });
            }
        }

        // Two triangles per cell
        let stride = (cols + 1) as u32;
        for iy in 0..rows as u32 {
            for ix in 0..cols as u32 {
                let a = ix + stride * iy;
                let b = ix + stride * (iy + 1);
                let c = ix + 1 + stride * (iy + 1);
                let d = ix + 1 + stride * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        let mut grid = Self { vertices, indices };
        grid.randomize_offsets(params.max_offset, rng);
        grid
    }

    /// Re-draw every vertex's Z offset uniformly from [0, max_offset)
    pub fn randomize_offsets<R: Rng>(&mut self, max_offset: f32, rng: &mut R) {
        for vertex in &mut self.vertices {
            vertex.position[2] = random_offset(max_offset, rng);
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of vertex `i`
    ///
    /// Panics if `i` is out of range, like slice indexing.
    pub fn vertex_at(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.vertices[i].position)
    }

    /// Overwrite the position of vertex `i`
    pub fn set_vertex_at(&mut self, i: usize, position: Vec3) {
        self.vertices[i].position = position.to_array();
    }

    /// Iterate vertex positions in index order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from_array(v.position))
    }

    /// Raw vertex data (for uploading to the GPU)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Triangle indices, counter-clockwise seen from +Z
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

fn random_offset<R: Rng>(max_offset: f32, rng: &mut R) -> f32 {
    if max_offset > 0.0 {
        rng.gen_range(0.0..max_offset)
    } else {
        0.0
    }
}
