//! Searching Paths on a [`Level`].
//!
//! Every search validates its endpoints first and then runs the generic
//! [`dijkstra_search`](crate::generics::dijkstra_search) with the Edges of the Level.

mod dijkstra;
pub use dijkstra::{shortest_path, shortest_path_to_all};

use crate::{generics, generics::Cost, Level, Point, PointMap};
use hashbrown::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calculates [`shortest_path_to_all`] from every Waypoint of `level`.
///
/// Every search runs on its own with its own state, so with the `parallel` feature the
/// Waypoints are searched on the rayon thread pool.
///
/// ## Examples
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "a1X\n11b".parse().unwrap();
///
/// let costs = costs_from_waypoints(&level, navigation_edges);
///
/// assert_eq!(costs.len(), 2);
/// assert_eq!(costs[&'a'][&(0, 0)], 0.0);
/// assert_eq!(costs[&'a'][&(1, 2)], costs[&'b'][&(0, 0)]);
/// ```
#[cfg(feature = "parallel")]
pub fn costs_from_waypoints<Adjacency, NeighborIter>(
    level: &Level,
    adjacency: Adjacency,
) -> HashMap<char, PointMap<Cost>>
where
    Adjacency: Fn(&Level, Point) -> NeighborIter + Sync,
    NeighborIter: IntoIterator<Item = (Point, Cost)>,
{
    level
        .waypoints()
        .par_iter()
        .map(|(&name, &source)| {
            let costs = generics::dijkstra_search_all(|cell| adjacency(level, cell), source);
            (name, costs)
        })
        .collect()
}

/// Calculates [`shortest_path_to_all`] from every Waypoint of `level`.
///
/// ## Examples
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "a1X\n11b".parse().unwrap();
///
/// let costs = costs_from_waypoints(&level, navigation_edges);
///
/// assert_eq!(costs.len(), 2);
/// assert_eq!(costs[&'a'][&(0, 0)], 0.0);
/// assert_eq!(costs[&'a'][&(1, 2)], costs[&'b'][&(0, 0)]);
/// ```
#[cfg(not(feature = "parallel"))]
pub fn costs_from_waypoints<NeighborIter>(
    level: &Level,
    adjacency: impl Fn(&Level, Point) -> NeighborIter,
) -> HashMap<char, PointMap<Cost>>
where
    NeighborIter: IntoIterator<Item = (Point, Cost)>,
{
    level
        .waypoints()
        .iter()
        .map(|(&name, &source)| {
            let costs = generics::dijkstra_search_all(|cell| adjacency(level, cell), source);
            (name, costs)
        })
        .collect()
}
