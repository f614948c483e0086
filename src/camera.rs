//! Perspective camera used for rendering and pointer ray casting.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::params::RenderConfig;
use crate::raycast::Ray;

/// Perspective camera looking from `eye` toward `target`
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin, as configured
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, config.camera_z),
            target: Vec3::ZERO,
            fov_y: config.fov_degrees.to_radians(),
            aspect: config.aspect_ratio(),
            near: config.near_plane,
            far: config.far_plane,
        }
    }

    /// Update aspect ratio after a viewport resize
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Y is always up (camera never rolls)
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the camera through a point in normalized device coordinates
    ///
    /// The origin is the eye; the direction goes through the unprojected
    /// point between the near and far planes.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_vp = self.view_proj().inverse();
        let near = inv_vp * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv_vp * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        Ray::new(self.eye, far - near)
    }
}
