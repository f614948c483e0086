//! Per-tick stochastic drift of every vertex.
//!
//! The frequency is re-drawn for every vertex on every tick rather than
//! fixed per vertex, so the motion is jitter rather than a clean periodic wave.

use rand::Rng;

use super::mesh::Grid;

/// Axis set the drift acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// Flat pose: x follows sin, y follows cos
    InPlane,
    /// Tilting or tilted: z follows sin
    Normal,
}

/// Oscillation settings taken from the surface parameters
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    /// Displacement scale (world units)
    pub amplitude: f32,
    /// Upper bound (exclusive) of the drawn frequency (per ms)
    pub max_freq: f64,
}

impl Oscillator {
    /// Nudge every vertex once
    ///
    /// # Arguments
    /// * `grid` - Mesh to perturb
    /// * `drift` - Which axes move
    /// * `now_ms` - Wall-clock time in milliseconds, shared by all vertices
    /// * `rng` - Source for the per-vertex frequencies
    pub fn apply<R: Rng>(&self, grid: &mut Grid, drift: Drift, now_ms: f64, rng: &mut R) {
        for vertex in grid.vertices_mut() {
            match drift {
                Drift::Normal => {
                    vertex.position[2] += self.wave(f64::sin, now_ms, rng);
                }
                Drift::InPlane => {
                    vertex.position[0] += self.wave(f64::sin, now_ms, rng);
                    vertex.position[1] += self.wave(f64::cos, now_ms, rng);
                }
            }
        }
    }

    fn wave<R: Rng>(&self, f: fn(f64) -> f64, now_ms: f64, rng: &mut R) -> f32 {
        let freq = if self.max_freq > 0.0 {
            rng.gen_range(0.0..self.max_freq)
        } else {
            0.0
        };
        f(now_ms * freq) as f32 * self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SurfaceParams;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Grid, Oscillator, StdRng) {
        let params = SurfaceParams::default();
        let mut rng = StdRng::seed_from_u64(21);
        let grid = Grid::new(&params, &mut rng);
        let osc = Oscillator {
            amplitude: params.oscillation_amplitude,
            max_freq: params.max_oscillation_freq,
        };
        (grid, osc, rng)
    }

    #[test]
    fn test_in_plane_at_time_zero_shifts_y_only() {
        let (mut grid, osc, mut rng) = setup();
        let before: Vec<Vec3> = grid.positions().collect();

        osc.apply(&mut grid, Drift::InPlane, 0.0, &mut rng);

        // sin(0) = 0, cos(0) = 1
        for (old, new) in before.iter().zip(grid.positions()) {
            assert_eq!(new.x, old.x);
            assert!((new.y - (old.y + 0.05)).abs() < 1e-5);
            assert_eq!(new.z, old.z);
        }
    }

    #[test]
    fn test_normal_drift_moves_z_only() {
        let (mut grid, osc, mut rng) = setup();
        let before: Vec<Vec3> = grid.positions().collect();

        osc.apply(&mut grid, Drift::Normal, 1.7e12, &mut rng);

        let mut moved = 0;
        for (old, new) in before.iter().zip(grid.positions()) {
            assert_eq!((new.x, new.y), (old.x, old.y));
            assert!((new.z - old.z).abs() <= 0.05 + 1e-6);
            if new.z != old.z {
                moved += 1;
            }
        }
        assert!(moved > 0);
    }

    #[test]
    fn test_in_plane_drift_is_bounded() {
        let (mut grid, osc, mut rng) = setup();
        let before: Vec<Vec3> = grid.positions().collect();

        osc.apply(&mut grid, Drift::InPlane, 1.7e12, &mut rng);

        for (old, new) in before.iter().zip(grid.positions()) {
            assert!((new.x - old.x).abs() <= 0.05 + 1e-4);
            assert!((new.y - old.y).abs() <= 0.05 + 1e-4);
            assert_eq!(new.z, old.z);
        }
    }

    #[test]
    fn test_frequency_redrawn_each_tick() {
        let (mut grid, osc, mut rng) = setup();
        let start = grid.vertex_at(0).z;

        osc.apply(&mut grid, Drift::Normal, 1.0e9, &mut rng);
        let first = grid.vertex_at(0).z - start;
        let mid = grid.vertex_at(0).z;
        osc.apply(&mut grid, Drift::Normal, 1.0e9, &mut rng);
        let second = grid.vertex_at(0).z - mid;

        // Same timestamp, different draws
        assert_ne!(first, second);
    }
}
