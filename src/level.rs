use crate::{
    generics::Cost,
    neighbors::{edge_cost, Neighborhood},
    CellFault, LevelError, PathError, Point, PointMap, PointSet,
};
use hashbrown::HashMap;

mod loader;
mod render;

/// A Grid of Walls and weighted Spaces, with named Waypoints.
///
/// A Level is immutable once created. [`Level::new`] guarantees that:
/// - no Point is both a Wall and a Space
/// - every Space has a positive, finite weight
/// - every Waypoint points at a Space
///
/// Points that are neither Walls nor Spaces do not exist as far as pathfinding is concerned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    walls: PointSet,
    spaces: PointMap<Cost>,
    waypoints: HashMap<char, Point>,
}

impl Level {
    /// Creates a new Level, checking that the parts fit together.
    ///
    /// ## Examples
    /// ```
    /// # use level_pathfinding::{Level, LevelError, PointMap, PointSet};
    /// # use hashbrown::HashMap;
    /// let walls: PointSet = [(0, 1)].into_iter().collect();
    /// let spaces: PointMap<f64> = [((0, 0), 1.0), ((1, 1), 2.0)].into_iter().collect();
    /// let waypoints: HashMap<char, _> = [('a', (0, 0))].into_iter().collect();
    ///
    /// let level = Level::new(walls.clone(), spaces.clone(), waypoints).unwrap();
    /// assert_eq!(level.waypoint('a').unwrap(), (0, 0));
    ///
    /// let dangling: HashMap<char, _> = [('b', (0, 1))].into_iter().collect();
    /// assert!(matches!(
    ///     Level::new(walls, spaces, dangling),
    ///     Err(LevelError::DanglingWaypoint { name: 'b', .. }),
    /// ));
    /// ```
    pub fn new(
        walls: PointSet,
        spaces: PointMap<Cost>,
        waypoints: HashMap<char, Point>,
    ) -> Result<Level, LevelError> {
        if let Some(&cell) = walls.iter().find(|cell| spaces.contains_key(*cell)) {
            return Err(LevelError::WallOverlap(cell));
        }
        if let Some((&cell, &weight)) = spaces
            .iter()
            .find(|(_, weight)| !(weight.is_finite() && **weight > 0.0))
        {
            return Err(LevelError::InvalidWeight { cell, weight });
        }
        if let Some((&name, &cell)) = waypoints
            .iter()
            .find(|(_, cell)| !spaces.contains_key(*cell))
        {
            return Err(LevelError::DanglingWaypoint { name, cell });
        }
        Ok(Level {
            walls,
            spaces,
            waypoints,
        })
    }

    /// All Walls of the Level
    pub fn walls(&self) -> &PointSet {
        &self.walls
    }

    /// All Spaces of the Level and their weights
    pub fn spaces(&self) -> &PointMap<Cost> {
        &self.spaces
    }

    /// All Waypoints of the Level
    pub fn waypoints(&self) -> &HashMap<char, Point> {
        &self.waypoints
    }

    /// The weight of the Space at `point`, or `None` if it is not a Space
    pub fn weight(&self, point: Point) -> Option<Cost> {
        self.spaces.get(&point).copied()
    }

    /// `true` if there is a Wall at `point`
    pub fn is_wall(&self, point: Point) -> bool {
        self.walls.contains(&point)
    }

    /// Looks up a Waypoint by name.
    pub fn waypoint(&self, name: char) -> Result<Point, LevelError> {
        self.waypoints
            .get(&name)
            .copied()
            .ok_or(LevelError::UnknownWaypoint(name))
    }

    /// The smallest and largest row and column of any Wall or Space, as `(min, max)`
    /// (both inclusive). `None` for an empty Level.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.walls.iter().chain(self.spaces.keys());
        let &first = points.next()?;
        Some(points.fold((first, first), |(min, max), &(row, col)| {
            ((min.0.min(row), min.1.min(col)), (max.0.max(row), max.1.max(col)))
        }))
    }

    /// Lists every Space in the `neighborhood` of `cell` together with the Cost of the Edge
    /// leading there.
    ///
    /// Candidates are checked in the order given by the Neighborhood: Walls are skipped, and so
    /// are Points that are not Spaces. If `cell` itself is not a Space, there are no Edges.
    pub fn edges_in<N: Neighborhood>(&self, neighborhood: &N, cell: Point) -> Vec<(Point, Cost)> {
        let weight = match self.weight(cell) {
            Some(weight) => weight,
            None => return Vec::new(),
        };
        neighborhood
            .get_all_neighbors(cell)
            .filter(|other| !self.is_wall(*other))
            .filter_map(|other| {
                self.weight(other)
                    .map(|other_weight| (other, edge_cost(cell, other, weight, other_weight)))
            })
            .collect()
    }

    /// Recomputes the Cost of walking along `path`.
    ///
    /// Returns `None` if the Path leaves the Spaces of the Level or contains a step between two
    /// Points that are not neighbors. An empty Path or a single Space costs nothing.
    pub fn path_cost(&self, path: &[Point]) -> Option<Cost> {
        if let Some(&first) = path.first() {
            self.weight(first)?;
        }
        path.windows(2).try_fold(0.0, |total, step| {
            let (a, b) = (step[0], step[1]);
            if a == b || a.0.abs_diff(b.0) > 1 || a.1.abs_diff(b.1) > 1 {
                return None;
            }
            Some(total + edge_cost(a, b, self.weight(a)?, self.weight(b)?))
        })
    }

    /// Fails if `cell` cannot be used as the source or destination of a search.
    pub(crate) fn check_traversable(&self, cell: Point) -> Result<(), PathError> {
        let reason = if self.is_wall(cell) {
            CellFault::Wall
        } else if !self.spaces.contains_key(&cell) {
            CellFault::NotASpace
        } else {
            return Ok(());
        };
        Err(PathError::InvalidCell { cell, reason })
    }
}
