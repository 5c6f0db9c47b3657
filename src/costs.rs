//! Writing cost tables produced by [`shortest_path_to_all`](crate::grid::shortest_path_to_all)

use crate::{generics::Cost, Level, Point, PointMap};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `costs` as CSV to `writer`.
///
/// The header is `row,column,weight,cost`, followed by one row per entry of `costs`, in order
/// of row and then column. `weight` is the weight of the Space in `level`, and left empty if
/// the Point is not a Space of the level.
///
/// ## Examples
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "a2".parse().unwrap();
/// let costs = shortest_path_to_all((0, 0), &level, navigation_edges).unwrap();
///
/// let mut out = Vec::new();
/// write_level_costs(&level, &costs, &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "row,column,weight,cost\n0,0,1,0\n0,1,2,1.5\n",
/// );
/// ```
pub fn write_level_costs<W: Write>(
    level: &Level,
    costs: &PointMap<Cost>,
    mut writer: W,
) -> io::Result<()> {
    let mut rows: Vec<(Point, Cost)> = costs.iter().map(|(&point, &cost)| (point, cost)).collect();
    rows.sort_unstable_by_key(|&(point, _)| point);

    writeln!(writer, "row,column,weight,cost")?;
    for ((row, col), cost) in rows {
        match level.weight((row, col)) {
            Some(weight) => writeln!(writer, "{},{},{},{}", row, col, weight, cost)?,
            None => writeln!(writer, "{},{},,{}", row, col, cost)?,
        }
    }
    writer.flush()
}

/// Creates (or truncates) the file at `path` and writes `costs` to it.
/// See [`write_level_costs`] for the format.
pub fn save_level_costs(
    level: &Level,
    costs: &PointMap<Cost>,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let path = path.as_ref();
    debug!("saving {} costs to {:?}", costs.len(), path);
    let file = File::create(path)?;
    write_level_costs(level, costs, BufWriter::new(file))
}
