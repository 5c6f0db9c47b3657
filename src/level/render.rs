use super::Level;
use crate::{Point, PointSet};
use hashbrown::HashMap;
use std::fmt;

impl Level {
    /// Renders the Level as text, one line per row, optionally marking a Path.
    ///
    /// Path Points are drawn as `*`, Walls as `X`, Waypoints by their name and other Spaces by
    /// their weight rounded to a whole number. Tiles that are neither Walls nor Spaces stay blank.
    /// Only the area within [`Level::bounds`] is drawn.
    ///
    /// ## Examples
    /// ```
    /// # use level_pathfinding::Level;
    /// let level = Level::parse("XXXX\nXa9X\nX 3X").unwrap();
    ///
    /// assert_eq!(level.show(None), "XXXX\nXa9X\nX 3X\n");
    /// assert_eq!(level.show(Some(&[(1, 1), (2, 2)][..])), "XXXX\nX*9X\nX *X\n");
    /// ```
    pub fn show(&self, path: Option<&[Point]>) -> String {
        let ((min_row, min_col), (max_row, max_col)) = match self.bounds() {
            Some(bounds) => bounds,
            None => return String::new(),
        };
        let path: PointSet = path.unwrap_or(&[]).iter().copied().collect();
        let names: HashMap<Point, char> = self
            .waypoints
            .iter()
            .map(|(&name, &point)| (point, name))
            .collect();

        let mut out = String::with_capacity((max_row - min_row + 1) * (max_col - min_col + 2));
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let point = (row, col);
                if path.contains(&point) {
                    out.push('*');
                } else if self.is_wall(point) {
                    out.push('X');
                } else if let Some(&name) = names.get(&point) {
                    out.push(name);
                } else if let Some(weight) = self.weight(point) {
                    out.push_str(&format!("{}", weight.round() as i64));
                } else {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Level {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.show(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_empty() {
        assert_eq!(Level::default().show(None), "");
        assert_eq!(Level::default().to_string(), "");
    }

    #[test]
    fn show_path_over_waypoints() {
        let level = Level::parse("a11\nX1b").unwrap();
        let path = [(0, 0), (0, 1), (1, 2)];

        assert_eq!(level.to_string(), "a11\nX1b\n");
        assert_eq!(level.show(Some(&path[..])), "**1\nX1*\n");
    }

    #[test]
    fn show_crops_to_bounds() {
        let level = Level::parse("\n  X1\n  1a").unwrap();
        assert_eq!(level.show(None), "X1\n1a\n");
    }
}
