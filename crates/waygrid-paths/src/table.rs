//! The dense per-cell node table the search runs over.

use waygrid_core::{ObstacleGrid, Point};

use crate::cost::CostModel;

/// Base-cost sentinel for cells that can never be entered.
pub(crate) const IMPASSABLE: f32 = -1.0;

/// Parent sentinel: the node has no predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Open/closed-set membership, reset before every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NodeState {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Search state for a single cell.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Cell position, fixed at build time.
    pub(crate) pos: Point,
    /// Traversal cost assigned at build time, or [`IMPASSABLE`].
    pub(crate) base: f32,
    /// Euclidean world-unit distance to the current goal.
    pub(crate) heuristic: f32,
    /// Best known working cost; mutable during search.
    pub(crate) total: f32,
    /// Index of the predecessor on the best known path, or [`NO_PARENT`].
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
}

impl Node {
    #[inline]
    pub(crate) fn passable(&self) -> bool {
        self.base > 0.0
    }
}

/// One node per grid cell, in row-major (`x + y * width`) order.
///
/// Built once per grid and reused across searches; only the per-search
/// fields (`heuristic`, `total`, `parent`, `state`) change afterwards.
pub(crate) struct NodeTable {
    width: i32,
    pub(crate) nodes: Vec<Node>,
}

impl NodeTable {
    pub(crate) fn build<G, C>(grid: &G, cost: &mut C) -> Self
    where
        G: ObstacleGrid,
        C: CostModel,
    {
        let width = grid.width().max(0);
        let mut nodes = Vec::with_capacity((width * width) as usize);
        for y in 0..width {
            for x in 0..width {
                let pos = Point::new(x, y);
                let base = if grid.is_obstacle(pos) {
                    IMPASSABLE
                } else {
                    cost.cost(pos)
                };
                nodes.push(Node {
                    pos,
                    base,
                    heuristic: 0.0,
                    total: 0.0,
                    parent: NO_PARENT,
                    state: NodeState::Unseen,
                });
            }
        }
        Self { width, nodes }
    }

    #[inline]
    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    /// Convert a point to its dense index. Returns `None` outside the grid.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.width {
            return None;
        }
        Some((p.x + p.y * self.width) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::ObstacleMap;

    #[test]
    fn build_covers_every_cell() {
        let mut map = ObstacleMap::new(4);
        map.set_obstacle(Point::new(2, 1), true);
        let table = NodeTable::build(&map, &mut |_: Point| 1.0);
        assert_eq!(table.nodes.len(), 16);
        for (i, node) in table.nodes.iter().enumerate() {
            assert_eq!(table.idx(node.pos), Some(i));
        }
    }

    #[test]
    fn obstacle_cells_carry_the_sentinel() {
        let mut map = ObstacleMap::new(3);
        map.set_obstacle(Point::new(0, 2), true);
        let table = NodeTable::build(&map, &mut |_: Point| 2.5);
        let blocked = table.idx(Point::new(0, 2)).unwrap();
        assert!(!table.nodes[blocked].passable());
        assert_eq!(table.nodes[blocked].base, IMPASSABLE);
        let open = table.idx(Point::new(1, 1)).unwrap();
        assert!(table.nodes[open].passable());
        assert_eq!(table.nodes[open].base, 2.5);
    }

    #[test]
    fn cost_model_queried_once_per_passable_cell() {
        let mut map = ObstacleMap::new(3);
        map.set_obstacle(Point::new(1, 1), true);
        let mut calls = 0;
        NodeTable::build(&map, &mut |_: Point| {
            calls += 1;
            1.0
        });
        assert_eq!(calls, 8);
    }

    #[test]
    fn idx_row_major_and_bounds() {
        let map = ObstacleMap::new(5);
        let table = NodeTable::build(&map, &mut |_: Point| 1.0);
        assert_eq!(table.idx(Point::new(3, 2)), Some(13));
        assert_eq!(table.idx(Point::new(0, 0)), Some(0));
        assert_eq!(table.idx(Point::new(4, 4)), Some(24));
        assert_eq!(table.idx(Point::new(-1, 0)), None);
        assert_eq!(table.idx(Point::new(5, 0)), None);
        assert_eq!(table.idx(Point::new(0, 5)), None);
    }
}
