#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Paths across weighted Grid levels.
//!
//! ## Introduction
//! A level is a Grid of Tiles, where every Tile is either a Wall, a Space or nothing at all.
//! Spaces carry a positive weight, which is the cost of walking one unit across them.
//! Moving between two neighboring Spaces costs the average of their weights, scaled by the
//! length of the step: `1` for the 4 cardinal directions and `sqrt(2)` for the 4 diagonals.
//!
//! Paths are searched with [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! either towards a single destination or towards every reachable Space of the level.
//!
//! ## Examples
//! Loading a level:
//! ```
//! use level_pathfinding::prelude::*;
//!
//! // X = wall, 1-9 = weight of a space, a-z = waypoint (weight 1)
//! let level: Level = "\
//! XXXXXX
//! Xa1  X
//! X9X11X
//! X111eX
//! XXXXXX"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(level.waypoint('a').unwrap(), (1, 1));
//! assert_eq!(level.weight((2, 1)), Some(9.0));
//! assert!(level.is_wall((2, 2)));
//! ```
//!
//! ### Pathfinding
//! Finding the Path between two Waypoints:
//! ```
//! # use level_pathfinding::prelude::*;
//! # let level: Level = "\
//! # XXXXXX
//! # Xa1  X
//! # X9X11X
//! # X111eX
//! # XXXXXX"
//! #     .parse()
//! #     .unwrap();
//! let source = level.waypoint('a').unwrap();
//! let destination = level.waypoint('e').unwrap();
//!
//! // shortest_path returns Ok(None) if the destination cannot be reached
//! let path = shortest_path(source, destination, &level, navigation_edges)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(path[0], source);
//! assert_eq!(path[path.len() - 1], destination);
//! ```
//!
//! Finding the cost to every reachable Space:
//! ```
//! # use level_pathfinding::prelude::*;
//! # let level: Level = "\
//! # XXXXXX
//! # Xa1  X
//! # X9X11X
//! # X111eX
//! # XXXXXX"
//! #     .parse()
//! #     .unwrap();
//! let source = level.waypoint('a').unwrap();
//! let costs = shortest_path_to_all(source, &level, navigation_edges).unwrap();
//!
//! assert_eq!(costs[&source], 0.0);
//! // every Space of this level is reachable
//! assert_eq!(costs.len(), level.spaces().len());
//! ```
//!
//! ### Output
//! [`Level::show`] renders a level with an optional Path overlay, and
//! [`costs::write_level_costs`] writes a cost table as CSV.

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

mod error;
pub use self::error::{CellFault, LevelError, PathError};

mod level;
pub use self::level::Level;

pub mod costs;

pub mod generics;

pub mod grid;

pub mod neighbors;

/// The common Types and Functions of this crate
pub mod prelude {
    pub use crate::{
        costs::{save_level_costs, write_level_costs},
        generics::{Cost, Path},
        grid::{costs_from_waypoints, shortest_path, shortest_path_to_all},
        neighbors::{navigation_edges, ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        Level, LevelError, PathError, Point, PointMap, PointSet,
    };
}
