//! High-level surface owning every per-instance piece of state.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::fade::Fade;
use super::mesh::Grid;
use super::oscillate::Oscillator;
use super::propagate::DisplacementPropagator;
use super::proxy::{build_proxies, ProxyVolume};
use super::tilt::{Pose, TiltMachine};
use crate::camera::Camera;
use crate::error::ParamsError;
use crate::params::SurfaceParams;
use crate::pointer::PointerTracker;
use crate::raycast::resolve_hit;

/// Animated surface with pointer displacement and a tilt transition
///
/// Each instance owns its grid, proxies, pointer slot and displacement token.
/// The caller drives it with one [`update`](Self::update) per frame.
pub struct LowPolySurface<R = StdRng> {
    grid: Grid,
    proxies: Vec<ProxyVolume>,
    pointer: PointerTracker,
    propagator: DisplacementPropagator,
    oscillator: Oscillator,
    tilt: TiltMachine,
    fade: Fade,
    /// Rotation about the surface normal (radians)
    spin: f32,
    params: SurfaceParams,
    rng: R,
}

impl LowPolySurface<StdRng> {
    /// Build a surface with a seeded RNG, or an entropy-seeded one if `seed` is `None`
    pub fn from_seed(params: SurfaceParams, seed: Option<u64>) -> Result<Self, ParamsError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(params, rng)
    }
}

impl<R: Rng> LowPolySurface<R> {
    /// Create the grid, randomize its offsets and snapshot the hit proxies
    pub fn new(params: SurfaceParams, mut rng: R) -> Result<Self, ParamsError> {
        params.validate()?;

        let grid = Grid::new(&params, &mut rng);
        let mesh_transform = Mat4::from_translation(Vec3::new(0.0, 0.0, params.mesh_offset_z));
        // Group transform is identity at construction
        let proxies = build_proxies(&grid, &mesh_transform, params.proxy_radius);

        info!(
            cols = params.cols,
            rows = params.rows,
            vertices = grid.len(),
            "surface created"
        );

        Ok(Self {
            grid,
            proxies,
            pointer: PointerTracker::new(),
            propagator: DisplacementPropagator::new(),
            oscillator: Oscillator {
                amplitude: params.oscillation_amplitude,
                max_freq: params.max_oscillation_freq,
            },
            tilt: TiltMachine::new(params.tilt_step, params.rest_angle),
            fade: Fade::new(params.max_opacity, params.fade_step),
            spin: 0.0,
            params,
            rng,
        })
    }

    /// Advance one frame
    ///
    /// Spins the group, drifts every vertex and fades in. While flat, the
    /// pointer is resolved against the proxies and the displacement token
    /// hops; while transitioning, the tilt eases one step.
    ///
    /// # Arguments
    /// * `camera` - Camera used to cast the pointer ray
    /// * `now_ms` - Wall-clock time in milliseconds
    pub fn update(&mut self, camera: &Camera, now_ms: f64) {
        self.spin += self.params.spin_step;

        let drift = self.tilt.drift();
        self.oscillator
            .apply(&mut self.grid, drift, now_ms, &mut self.rng);

        self.fade.tick();

        if self.tilt.is_flat() {
            self.resolve_pointer(camera);
        } else {
            self.tilt.step();
        }
    }

    /// Start the eased transition to the resting pose
    pub fn tilt(&mut self) {
        self.tilt.tilt();
    }

    /// Return to the interactive pose immediately
    pub fn pre_tilt(&mut self) {
        self.grid
            .randomize_offsets(self.params.max_offset, &mut self.rng);
        self.tilt.reset();
        self.fade.fill();
        debug!("surface reset to flat pose");
    }

    /// Jump to the resting pose immediately
    pub fn post_tilt(&mut self) {
        self.tilt.settle();
        self.fade.fill();
        debug!(angle = self.tilt.angle(), "surface jumped to tilted pose");
    }

    fn resolve_pointer(&mut self, camera: &Camera) {
        let ndc = self.pointer.latest();
        let ray = camera.ray_from_ndc(ndc);

        if let Some(hit) = resolve_hit(&ray, &self.proxies, &self.group_transform()) {
            trace!(index = hit.index, distance = hit.distance, "pointer hit");
            self.propagator.apply_hit(&mut self.grid, hit.index);
        }
    }

    /// Pointer slot; clone it to feed moves from the event loop
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn proxies(&self) -> &[ProxyVolume] {
        &self.proxies
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn pose(&self) -> Pose {
        self.tilt.pose()
    }

    pub fn is_tilted(&self) -> bool {
        !self.tilt.is_flat()
    }

    /// Rotation about the tilt axis (X, radians)
    pub fn tilt_angle(&self) -> f32 {
        self.tilt.angle()
    }

    /// Rotation about the surface normal (Z, radians)
    pub fn spin_angle(&self) -> f32 {
        self.spin
    }

    /// Displacement token in flight
    pub fn carried(&self) -> Option<Vec3> {
        self.propagator.carried()
    }

    /// Group space to world: tilt about X applied after spin about Z
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.tilt.angle()) * Mat4::from_rotation_z(self.spin)
    }

    /// Mesh space to group space
    pub fn mesh_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.params.mesh_offset_z))
    }

    /// Mesh space to world
    pub fn model_matrix(&self) -> Mat4 {
        self.group_transform() * self.mesh_transform()
    }
}
