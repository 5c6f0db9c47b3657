//! The Neighborhoods of a Grid and the Cost of the Edges between neighboring Spaces

use crate::{generics::Cost, Level, Point};
use std::f64::consts::SQRT_2;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait only lists the candidate Points around a Point. Whether a candidate is a Wall, a
/// Space or nothing at all is checked by [`Level::edges_in`].
///
/// The implementations of this Trait provided by this Module:
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point, in a fixed order.
    ///
    /// Candidates with a negative coordinate are never returned.
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
}

/// Offsets as `(row, column)`, in the order they are enumerated.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const MANHATTAN_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

fn offset_points(
    point: Point,
    offsets: &'static [(isize, isize)],
) -> Box<dyn Iterator<Item = Point>> {
    let iter = offsets.iter().filter_map(move |&(d_row, d_col)| {
        Some((
            point.0.checked_add_signed(d_row)?,
            point.1.checked_add_signed(d_col)?,
        ))
    });
    Box::new(iter)
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreNeighborhood;

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
        offset_points(point, &MOORE_OFFSETS)
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanNeighborhood;

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
        offset_points(point, &MANHATTAN_OFFSETS)
    }
}

/// The Cost of moving directly from `a` (with weight `weight_a`) to the neighboring `b`.
///
/// This is the average of both weights, scaled by the length of the step:
/// `1` for orthogonal steps and `sqrt(2)` for diagonal ones.
/// ```
/// # use level_pathfinding::neighbors::edge_cost;
/// assert_eq!(edge_cost((0, 0), (0, 1), 1.0, 3.0), 2.0);
/// assert_eq!(edge_cost((0, 0), (1, 1), 2.0, 2.0), 2.0 * std::f64::consts::SQRT_2);
/// ```
pub fn edge_cost(a: Point, b: Point, weight_a: Cost, weight_b: Cost) -> Cost {
    let average = (weight_a + weight_b) / 2.0;
    if a.0 != b.0 && a.1 != b.1 {
        average * SQRT_2
    } else {
        average
    }
}

/// The adjacency Function for navigating a [`Level`]: every Space in the [`MooreNeighborhood`]
/// of `cell`, with the Cost of the Edge leading there.
///
/// Walls and Points that are not Spaces of the level are skipped.
///
/// ## Examples
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "a1\n1X".parse().unwrap();
///
/// assert_eq!(
///     navigation_edges(&level, (0, 0)),
///     vec![((1, 0), 1.0), ((0, 1), 1.0)],
/// );
/// ```
pub fn navigation_edges(level: &Level, cell: Point) -> Vec<(Point, Cost)> {
    level.edges_in(&MooreNeighborhood, cell)
}
