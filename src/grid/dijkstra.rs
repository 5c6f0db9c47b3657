use crate::{
    generics::{self, Cost, Path},
    Level, PathError, Point, PointMap,
};
use log::debug;

/// Searches for the cheapest Path from `source` to `destination` on a [`Level`] using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// `adjacency` lists the neighbors of a Cell and the Cost of the Edge to each of them. It is
/// usually [`navigation_edges`](crate::neighbors::navigation_edges), but any Function that
/// returns non-negative Costs and gives the same answer every time it is asked works.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// # use std::f64::consts::SQRT_2;
/// let level: Level = "\
/// a11
/// 111
/// 11b"
///     .parse()
///     .unwrap();
///
/// let path = shortest_path((0, 0), (2, 2), &level, navigation_edges)
///     .unwrap()
///     .unwrap();
///
/// // two diagonal steps
/// assert_eq!(path.path, vec![(0, 0), (1, 1), (2, 2)]);
/// assert!((path.cost - 2.0 * SQRT_2).abs() < 1e-9);
/// ```
///
/// ## Returns
/// - `Ok(Some(path))` with the first Cell being `source` and the last being `destination`
/// - `Ok(None)` if `destination` cannot be reached from `source`
/// - `Err(PathError::InvalidCell)` if `source` or `destination` is not a Space of the Level
pub fn shortest_path<NeighborIter>(
    source: Point,
    destination: Point,
    level: &Level,
    adjacency: impl Fn(&Level, Point) -> NeighborIter,
) -> Result<Option<Path<Point>>, PathError>
where
    NeighborIter: IntoIterator<Item = (Point, Cost)>,
{
    level.check_traversable(source)?;
    level.check_traversable(destination)?;

    debug!("searching path {:?} -> {:?}", source, destination);
    Ok(generics::dijkstra_search(
        |cell| adjacency(level, cell),
        source,
        destination,
    ))
}

/// Calculates the Cost of the cheapest Path from `source` to every reachable Cell of a
/// [`Level`].
///
/// See [`shortest_path`] for the requirements on `adjacency`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "\
/// a1X1
/// 11X1"
///     .parse()
///     .unwrap();
///
/// let costs = shortest_path_to_all((0, 0), &level, navigation_edges).unwrap();
///
/// assert_eq!(costs[&(0, 0)], 0.0);
/// assert_eq!(costs[&(1, 0)], 1.0);
/// // the right column is cut off by the wall
/// assert_eq!(costs.len(), 4);
/// assert!(!costs.contains_key(&(0, 3)));
/// ```
///
/// ## Returns
/// a Map from every Cell reachable from `source` (including `source` itself) to its Cost.
/// Unreachable Cells have no entry.
pub fn shortest_path_to_all<NeighborIter>(
    source: Point,
    level: &Level,
    adjacency: impl Fn(&Level, Point) -> NeighborIter,
) -> Result<PointMap<Cost>, PathError>
where
    NeighborIter: IntoIterator<Item = (Point, Cost)>,
{
    level.check_traversable(source)?;

    debug!("searching costs from {:?}", source);
    Ok(generics::dijkstra_search_all(
        |cell| adjacency(level, cell),
        source,
    ))
}
