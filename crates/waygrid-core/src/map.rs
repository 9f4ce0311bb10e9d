//! Square obstacle maps.
//!
//! [`ObstacleGrid`] is the read-only view the pathfinder searches over.
//! [`ObstacleMap`] is a dense implementation that can be edited in place or
//! parsed from ASCII map text (`.` floor, `#` wall), one line per row.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// Read-only view of a square obstacle grid.
///
/// The pathfinder only needs a side length and a per-cell obstacle flag, so
/// hosts can implement this on top of any map representation.
pub trait ObstacleGrid {
    /// Side length of the square grid, in cells.
    fn width(&self) -> i32;

    /// Whether the cell at `p` cannot be entered. Positions outside the
    /// grid count as obstacles.
    fn is_obstacle(&self, p: Point) -> bool;
}

/// A dense square obstacle map backed by a row-major boolean vector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleMap {
    width: i32,
    cells: Vec<bool>,
}

impl ObstacleMap {
    /// Create an all-floor map of the given side length.
    pub fn new(width: i32) -> Self {
        let width = width.max(0);
        Self {
            width,
            cells: vec![false; (width * width) as usize],
        }
    }

    /// Parse a map from ASCII text.
    ///
    /// Leading/trailing whitespace around the whole string is trimmed.
    /// Every line must be exactly as wide as the map is tall, `.` marks
    /// floor and `#` marks a wall.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut width = -1i32;
        let mut cells = Vec::new();
        let mut y = 0i32;
        for line in s.lines() {
            let mut x = 0i32;
            for ch in line.chars() {
                match ch {
                    '.' => cells.push(false),
                    '#' => cells.push(true),
                    _ => {
                        return Err(MapError::UnknownTile {
                            ch,
                            pos: Point::new(x, y),
                        });
                    }
                }
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(MapError::RaggedLine { y, len: x, width });
            }
            y += 1;
        }
        if y != width {
            return Err(MapError::NotSquare { width, height: y });
        }

        Ok(Self { width, cells })
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.width
    }

    /// Mark or clear the obstacle flag at `p`. Out-of-bounds positions are
    /// ignored.
    pub fn set_obstacle(&mut self, p: Point, blocked: bool) {
        if self.in_bounds(p) {
            let i = self.index(p);
            self.cells[i] = blocked;
        }
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.x + p.y * self.width) as usize
    }
}

impl ObstacleGrid for ObstacleMap {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn is_obstacle(&self, p: Point) -> bool {
        !self.in_bounds(p) || self.cells[self.index(p)]
    }
}

impl FromStr for ObstacleMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

/// Errors from [`ObstacleMap::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input contained no map lines.
    Empty,
    /// A line's width differs from the first line's.
    RaggedLine { y: i32, len: i32, width: i32 },
    /// The map is not as tall as it is wide.
    NotSquare { width: i32, height: i32 },
    /// A character other than `.` or `#` was found.
    UnknownTile { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty input"),
            Self::RaggedLine { y, len, width } => {
                write!(f, "map: line {y} is {len} cells wide, expected {width}")
            }
            Self::NotSquare { width, height } => {
                write!(f, "map: {width} cells wide but {height} lines tall")
            }
            Self::UnknownTile { ch, pos } => {
                write!(f, "map: unknown tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let m = ObstacleMap::parse("..\n#.").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: ObstacleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
