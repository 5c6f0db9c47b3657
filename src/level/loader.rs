use super::Level;
use crate::{generics::Cost, LevelError, PointMap, PointSet};
use hashbrown::{hash_map::Entry, HashMap};
use log::debug;
use std::{fs, path::Path, str::FromStr};

impl Level {
    /// Parses a Level from its text form.
    ///
    /// Every line is a row of the Grid and every character a Tile:
    /// - `A`-`Z`: a Wall
    /// - `1`-`9`: a Space with that weight
    /// - `a`-`z`: a Waypoint with that name, on a Space of weight `1`
    /// - ` `: nothing. The Tile is neither a Wall nor a Space
    ///
    /// ## Examples
    /// ```
    /// # use level_pathfinding::Level;
    /// let level = Level::parse("XXXX\nXa9X\nX 3X").unwrap();
    ///
    /// assert_eq!(level.waypoint('a').unwrap(), (1, 1));
    /// assert_eq!(level.weight((1, 2)), Some(9.0));
    /// assert_eq!(level.weight((2, 1)), None);
    /// assert!(level.is_wall((0, 3)));
    /// ```
    pub fn parse(text: &str) -> Result<Level, LevelError> {
        let mut walls = PointSet::default();
        let mut spaces = PointMap::default();
        let mut waypoints = HashMap::new();

        for (row, line) in text.lines().enumerate() {
            for (col, tile) in line.chars().enumerate() {
                let point = (row, col);
                match tile {
                    'A'..='Z' => {
                        walls.insert(point);
                    }
                    '1'..='9' => {
                        let weight = tile.to_digit(10).unwrap_or(1);
                        spaces.insert(point, Cost::from(weight));
                    }
                    'a'..='z' => {
                        match waypoints.entry(tile) {
                            Entry::Occupied(first) => {
                                return Err(LevelError::DuplicateWaypoint {
                                    name: tile,
                                    first: *first.get(),
                                    second: point,
                                })
                            }
                            Entry::Vacant(slot) => {
                                slot.insert(point);
                            }
                        }
                        spaces.insert(point, 1.0);
                    }
                    ' ' => {}
                    found => {
                        return Err(LevelError::Malformed {
                            line: row + 1,
                            column: col + 1,
                            found,
                        })
                    }
                }
            }
        }

        debug!(
            "parsed level: {} walls, {} spaces, {} waypoints",
            walls.len(),
            spaces.len(),
            waypoints.len()
        );
        Level::new(walls, spaces, waypoints)
    }

    /// Reads and parses the Level stored at `path`. See [`Level::parse`] for the format.
    pub fn load(path: impl AsRef<Path>) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading level from {:?}", path);
        Level::parse(&text)
    }
}

impl FromStr for Level {
    type Err = LevelError;
    fn from_str(text: &str) -> Result<Level, LevelError> {
        Level::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "\
XXXXX
Xa1bX
X9 2X
XXXXX
";

    #[test]
    fn parse_simple() {
        let level = Level::parse(SIMPLE).unwrap();

        assert_eq!(level.walls().len(), 14);
        assert_eq!(level.spaces().len(), 5);
        assert_eq!(level.waypoints().len(), 2);

        assert_eq!(level.waypoint('a').unwrap(), (1, 1));
        assert_eq!(level.waypoint('b').unwrap(), (1, 3));
        assert_eq!(level.weight((1, 1)), Some(1.0));
        assert_eq!(level.weight((1, 2)), Some(1.0));
        assert_eq!(level.weight((2, 1)), Some(9.0));
        assert_eq!(level.weight((2, 2)), None);
        assert!(!level.is_wall((2, 2)));
        assert_eq!(level.weight((2, 3)), Some(2.0));
    }

    #[test]
    fn parse_crlf() {
        let level = Level::parse("Xa\r\n1X\r\n").unwrap();
        assert_eq!(level.spaces().len(), 2);
        assert_eq!(level.walls().len(), 2);
    }

    #[test]
    fn parse_malformed() {
        assert!(matches!(
            Level::parse("XXX\nX#X"),
            Err(LevelError::Malformed {
                line: 2,
                column: 2,
                found: '#'
            })
        ));
        // weights must be positive
        assert!(matches!(
            Level::parse("a0"),
            Err(LevelError::Malformed { found: '0', .. })
        ));
    }

    #[test]
    fn parse_duplicate_waypoint() {
        assert!(matches!(
            Level::parse("a1\n1a"),
            Err(LevelError::DuplicateWaypoint {
                name: 'a',
                first: (0, 0),
                second: (1, 1)
            })
        ));
    }

    #[test]
    fn from_str() {
        let level: Level = SIMPLE.parse().unwrap();
        assert_eq!(level, Level::parse(SIMPLE).unwrap());
    }

    #[test]
    fn load_missing_file() {
        let err = Level::load("this/level/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "level_pathfinding_load_{}.txt",
            std::process::id()
        ));
        fs::write(&path, SIMPLE).unwrap();
        let level = Level::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(level.unwrap(), Level::parse(SIMPLE).unwrap());
    }
}
