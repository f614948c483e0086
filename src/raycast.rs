//! Pointer ray casting against proxy hit volumes.

use glam::{Mat4, Vec3};

use crate::surface::ProxyVolume;

/// A ray in 3D space (direction is unit length)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Same ray expressed in the space mapped by `matrix`
    ///
    /// `matrix` must be rigid (rotation + translation) so distances along the
    /// ray are preserved.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }

    /// Distance at which the ray enters a sphere from outside
    ///
    /// Rays starting inside the sphere only meet its back side and don't count.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let near = -b - discriminant.sqrt();
        // Behind the origin, or the origin is inside
        (near >= 0.0).then_some(near)
    }
}

/// Closest proxy along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Stamped vertex index of the proxy that was hit
    pub index: usize,
    /// Distance from the ray origin in world units
    pub distance: f32,
}

/// Find the nearest proxy hit by a world-space ray
///
/// Proxies live in the surface group's local space; `group_transform` maps
/// that space to world. Ties keep the first proxy in index order.
pub fn resolve_hit(ray: &Ray, proxies: &[ProxyVolume], group_transform: &Mat4) -> Option<RayHit> {
    if proxies.is_empty() {
        return None;
    }

    let local_ray = ray.transformed(&group_transform.inverse());
    let mut closest: Option<RayHit> = None;

    for proxy in proxies {
        let Some(distance) = local_ray.intersect_sphere(proxy.center, proxy.radius) else {
            continue;
        };
        let is_closer = closest.map_or(true, |c| distance < c.distance);
        if is_closer {
            closest = Some(RayHit {
                index: proxy.index,
                distance,
            });
        }
    }

    closest
}
