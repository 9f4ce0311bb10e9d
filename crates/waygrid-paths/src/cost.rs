//! Per-cell traversal cost policies.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use waygrid_core::Point;

/// Traversal-cost policy, queried once per passable cell when the node
/// table is built.
pub trait CostModel {
    /// Cost of entering the cell at `p`. Must be > 0.
    fn cost(&mut self, p: Point) -> f32;
}

/// Any `FnMut(Point) -> f32` closure is a cost model.
impl<F: FnMut(Point) -> f32> CostModel for F {
    fn cost(&mut self, p: Point) -> f32 {
        self(p)
    }
}

/// Every passable cell costs the same.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost(pub f32);

impl CostModel for UniformCost {
    fn cost(&mut self, _p: Point) -> f32 {
        self.0
    }
}

/// Pseudo-random cost in `[500, 3500)` per cell.
///
/// Note that these costs share no unit with the Euclidean heuristic, so
/// the search order is not guaranteed admissible under this model; see
/// [`Pathfinder`](crate::Pathfinder).
#[derive(Debug)]
pub struct RandomCost {
    rng: StdRng,
}

impl RandomCost {
    /// A model drawing from a fresh, entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// A model with a fixed seed, for reproducible grids.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCost {
    fn default() -> Self {
        Self::new()
    }
}

impl CostModel for RandomCost {
    fn cost(&mut self, _p: Point) -> f32 {
        self.rng.random_range(500..3500) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_constant() {
        let mut c = UniformCost(7.5);
        assert_eq!(c.cost(Point::ZERO), 7.5);
        assert_eq!(c.cost(Point::new(9, 9)), 7.5);
    }

    #[test]
    fn closure_as_model() {
        let mut c = |p: Point| (p.x + p.y) as f32 + 1.0;
        assert_eq!(CostModel::cost(&mut c, Point::new(2, 3)), 6.0);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = RandomCost::seeded(42);
        let mut b = RandomCost::seeded(42);
        for _ in 0..16 {
            let cost = a.cost(Point::ZERO);
            assert_eq!(cost, b.cost(Point::ZERO));
            assert!((500.0..3500.0).contains(&cost));
        }
    }
}
