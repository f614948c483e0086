//! Displacement token that hops between touched vertices.

use glam::Vec3;

use super::mesh::Grid;

/// Carries one vertex position from hit to hit
///
/// Each hit swaps the carried position into the touched vertex and picks up
/// that vertex's previous position. The first hit only loads the token.
#[derive(Debug, Clone, Default)]
pub struct DisplacementPropagator {
    carried: Option<Vec3>,
}

impl DisplacementPropagator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value currently in flight, if any
    pub fn carried(&self) -> Option<Vec3> {
        self.carried
    }

    /// Apply a resolved hit at vertex `index`
    pub fn apply_hit(&mut self, grid: &mut Grid, index: usize) {
        let current = grid.vertex_at(index);
        if let Some(carried) = self.carried {
            grid.set_vertex_at(index, carried);
        }
        self.carried = Some(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SurfaceParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_grid() -> Grid {
        Grid::new(&SurfaceParams::default(), &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_first_hit_only_loads_token() {
        let mut grid = test_grid();
        let mut propagator = DisplacementPropagator::new();
        let before = grid.vertex_at(3);

        propagator.apply_hit(&mut grid, 3);

        assert_eq!(grid.vertex_at(3), before);
        assert_eq!(propagator.carried(), Some(before));
    }

    #[test]
    fn test_hit_three_then_seven() {
        let mut grid = test_grid();
        let mut propagator = DisplacementPropagator::new();
        let v3 = grid.vertex_at(3);
        let v7 = grid.vertex_at(7);

        propagator.apply_hit(&mut grid, 3);
        assert_eq!(grid.vertex_at(3), v3);

        propagator.apply_hit(&mut grid, 7);
        assert_eq!(grid.vertex_at(7), v3);
        assert_eq!(grid.vertex_at(3), v3);
        assert_eq!(propagator.carried(), Some(v7));
    }

    #[test]
    fn test_propagation_law_over_three_hits() {
        let mut grid = test_grid();
        let mut propagator = DisplacementPropagator::new();
        let (i1, i2, i3) = (12, 40, 200);
        let (v1, v2, v3) = (grid.vertex_at(i1), grid.vertex_at(i2), grid.vertex_at(i3));

        propagator.apply_hit(&mut grid, i1);
        assert_eq!(grid.vertex_at(i1), v1);
        assert_eq!(propagator.carried(), Some(v1));

        propagator.apply_hit(&mut grid, i2);
        assert_eq!(grid.vertex_at(i2), v1);
        assert_eq!(propagator.carried(), Some(v2));

        propagator.apply_hit(&mut grid, i3);
        assert_eq!(grid.vertex_at(i3), v2);
        assert_eq!(propagator.carried(), Some(v3));
    }

    #[test]
    fn test_repeated_hit_on_same_vertex_is_stable() {
        let mut grid = test_grid();
        let mut propagator = DisplacementPropagator::new();
        let v = grid.vertex_at(20);

        for _ in 0..5 {
            propagator.apply_hit(&mut grid, 20);
        }

        assert_eq!(grid.vertex_at(20), v);
        assert_eq!(propagator.carried(), Some(v));
    }
}
