use crate::{generics::Cost, Point};
use std::{fmt, io, path::PathBuf};

/// Errors that can occur while building or loading a [`Level`](crate::Level).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level {path:?}")]
    Io {
        /// the file that was requested
        path: PathBuf,
        /// the underlying error
        #[source]
        source: io::Error,
    },

    /// The level text contains a character with no meaning.
    ///
    /// `line` and `column` are 1-based, as a text editor would show them.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    Malformed {
        /// 1-based line of the character
        line: usize,
        /// 1-based column of the character
        column: usize,
        /// the offending character
        found: char,
    },

    /// The same Waypoint name was used for two different Tiles.
    #[error("waypoint {name:?} appears at both {first:?} and {second:?}")]
    DuplicateWaypoint {
        /// the name of the Waypoint
        name: char,
        /// where the Waypoint was seen first
        first: Point,
        /// where it was seen again
        second: Point,
    },

    /// A Tile is both a Wall and a Space.
    #[error("{0:?} is both a wall and a space")]
    WallOverlap(Point),

    /// A Waypoint does not point at a Space.
    #[error("waypoint {name:?} at {cell:?} is not a space")]
    DanglingWaypoint {
        /// the name of the Waypoint
        name: char,
        /// where the Waypoint points
        cell: Point,
    },

    /// A Space has a weight that is not a positive, finite number.
    #[error("space {cell:?} has invalid weight {weight}")]
    InvalidWeight {
        /// the Space
        cell: Point,
        /// its weight
        weight: Cost,
    },

    /// The requested Waypoint does not exist in the level.
    #[error("no waypoint named {0:?}")]
    UnknownWaypoint(char),
}

/// Errors that can occur when a search is started on invalid Cells.
///
/// An unreachable destination is not an error; see [`shortest_path`](crate::grid::shortest_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    /// The source or destination of a search cannot be walked on.
    #[error("invalid cell {cell:?}: {reason}")]
    InvalidCell {
        /// the rejected Cell
        cell: Point,
        /// why it was rejected
        reason: CellFault,
    },
}

/// The reason a Cell was rejected as the endpoint of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFault {
    /// the Cell is a Wall
    Wall,
    /// the Cell is neither a Wall nor a Space of the level
    NotASpace,
}

impl fmt::Display for CellFault {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellFault::Wall => write!(fmt, "cell is a wall"),
            CellFault::NotASpace => write!(fmt, "cell is not a space of the level"),
        }
    }
}
