//! Invisible hit spheres, one per grid vertex.

use glam::{Mat4, Vec3};

use super::mesh::Grid;

/// Hit-test sphere stamped with the index of its vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyVolume {
    pub index: usize,
    /// Centre in surface-group space
    pub center: Vec3,
    pub radius: f32,
}

/// Snapshot every vertex position under `mesh_transform` into a proxy list
///
/// The result is parallel to the grid: `proxies[i].index == i`. Proxies are
/// never moved afterwards, even when their vertex is.
pub fn build_proxies(grid: &Grid, mesh_transform: &Mat4, radius: f32) -> Vec<ProxyVolume> {
    grid.positions()
        .enumerate()
        .map(|(index, position)| ProxyVolume {
            index,
            center: mesh_transform.transform_point3(position),
            radius,
        })
        .collect()
}
