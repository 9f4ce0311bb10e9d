//! The pathfinder service type and its control surface.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use waygrid_core::{ObstacleGrid, Point};

use crate::cost::{CostModel, UniformCost};
use crate::table::NodeTable;

/// Cell side length in pixels used by [`Pathfinder::with_defaults`].
pub const DEFAULT_CELL_SIZE: f32 = 25.0;

/// Coordinate unit accepted by the start/end setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Already cell-scaled coordinates; floored to a cell.
    Cells,
    /// Pixel coordinates; divided by the cell size, then floored.
    Pixels,
}

/// Result of a path recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A path to the goal was found and rebuilt.
    Found,
    /// The frontier was exhausted before reaching the goal; the path is
    /// now empty.
    NoPath,
    /// An endpoint is unset or outside the grid; no search was run and
    /// the previous path is untouched.
    InvalidPosition,
}

/// Heap entry into the node table, min-ordered by `f` with ties broken by
/// insertion sequence so equal-cost pops stay in insertion order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub(crate) f: f32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops lowest f, earliest seq.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grid A* pathfinder.
///
/// Owns a dense node table built once from a grid, plus the start/end
/// cells and the last computed path. Every endpoint change reruns the
/// search in full; there is no incremental re-planning.
///
/// The heuristic is Euclidean distance scaled by the cell size, while base
/// costs are whatever the [`CostModel`] produced, so with cost models like
/// [`RandomCost`](crate::RandomCost) the two are not commensurate and the
/// search order is not guaranteed admissible. Paths still satisfy the
/// relaxation rule; they are not always globally shortest.
pub struct Pathfinder {
    pub(crate) table: NodeTable,
    cell_size: f32,
    start: Option<Point>,
    end: Option<Point>,
    pub(crate) open: BinaryHeap<OpenEntry>,
    pub(crate) seq: u64,
    pub(crate) path: Vec<Point>,
}

impl Pathfinder {
    /// Build a pathfinder over `grid`, assigning each passable cell a base
    /// cost from `cost`.
    pub fn new<G, C>(grid: &G, mut cost: C, cell_size: f32) -> Self
    where
        G: ObstacleGrid,
        C: CostModel,
    {
        Self {
            table: NodeTable::build(grid, &mut cost),
            cell_size,
            start: None,
            end: None,
            open: BinaryHeap::new(),
            seq: 0,
            path: Vec::new(),
        }
    }

    /// Build a pathfinder with unit base costs and the default cell size.
    pub fn with_defaults<G: ObstacleGrid>(grid: &G) -> Self {
        Self::new(grid, UniformCost(1.0), DEFAULT_CELL_SIZE)
    }

    /// Set the start cell and recompute the path.
    pub fn set_start(&mut self, x: f32, y: f32, unit: Unit) -> SearchOutcome {
        self.start = Some(self.to_cell(x, y, unit));
        self.update_path()
    }

    /// Set the end cell and recompute the path.
    pub fn set_end(&mut self, x: f32, y: f32, unit: Unit) -> SearchOutcome {
        self.end = Some(self.to_cell(x, y, unit));
        self.update_path()
    }

    /// The last computed path, in goal→start order (goal included, start
    /// excluded). Empty if the last search failed or none has run.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The configured start cell, if any. May lie outside the grid.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The configured end cell, if any. May lie outside the grid.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Side length of the underlying grid, in cells.
    pub fn width(&self) -> i32 {
        self.table.width()
    }

    /// Cell side length in pixels.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether the cell at `p` is impassable. Positions outside the grid
    /// count as obstacles. Intended for visualization.
    pub fn is_obstacle(&self, p: Point) -> bool {
        match self.table.idx(p) {
            Some(i) => !self.table.nodes[i].passable(),
            None => true,
        }
    }

    /// Advance the search by one step.
    ///
    /// Searches run to completion inside the setters, so there is never
    /// partial work left to do and this always reports completion.
    pub fn step(&mut self) -> bool {
        true
    }

    fn to_cell(&self, x: f32, y: f32, unit: Unit) -> Point {
        let (x, y) = match unit {
            Unit::Cells => (x, y),
            Unit::Pixels => (x / self.cell_size, y / self.cell_size),
        };
        Point::new(x.floor() as i32, y.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::ObstacleMap;

    #[test]
    fn cell_unit_floors() {
        let mut pf = Pathfinder::with_defaults(&ObstacleMap::new(4));
        pf.set_start(2.9, 0.1, Unit::Cells);
        assert_eq!(pf.start(), Some(Point::new(2, 0)));
    }

    #[test]
    fn pixel_unit_scales_then_floors() {
        let mut pf = Pathfinder::with_defaults(&ObstacleMap::new(4));
        pf.set_start(55.0, 30.0, Unit::Pixels);
        assert_eq!(pf.start(), Some(Point::new(2, 1)));
        pf.set_end(99.9, 0.0, Unit::Pixels);
        assert_eq!(pf.end(), Some(Point::new(3, 0)));
    }

    #[test]
    fn negative_coordinates_floor_downward() {
        let mut pf = Pathfinder::with_defaults(&ObstacleMap::new(4));
        let outcome = pf.set_start(-0.5, 0.0, Unit::Cells);
        assert_eq!(pf.start(), Some(Point::new(-1, 0)));
        assert_eq!(outcome, SearchOutcome::InvalidPosition);
    }

    #[test]
    fn step_reports_completion() {
        let mut pf = Pathfinder::with_defaults(&ObstacleMap::new(4));
        assert!(pf.step());
        pf.set_start(0.0, 0.0, Unit::Cells);
        pf.set_end(3.0, 3.0, Unit::Cells);
        assert!(pf.step());
    }

    #[test]
    fn open_entry_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry {
            f: 2.0,
            seq: 0,
            idx: 0,
        });
        heap.push(OpenEntry {
            f: 1.0,
            seq: 2,
            idx: 1,
        });
        heap.push(OpenEntry {
            f: 1.0,
            seq: 1,
            idx: 2,
        });
        // Lowest f first; equal f pops in insertion order.
        assert_eq!(heap.pop().unwrap().idx, 2);
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }
}
