//! **waygrid-core** — Geometry and obstacle-map types for the waygrid
//! pathfinding engine.
//!
//! This crate provides the types shared between the pathfinder and its
//! hosts: the integer [`Point`] primitive, the [`ObstacleGrid`] trait the
//! engine searches over, and [`ObstacleMap`], a dense square implementation
//! that can be parsed from ASCII map text.

pub mod geom;
pub mod map;

pub use geom::Point;
pub use map::{MapError, ObstacleGrid, ObstacleMap};
