use env_logger::Env;
use level_pathfinding::prelude::*;
use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

/// What to run. Every field can be overridden by a positional argument, in this order.
#[derive(Clone, Debug, PartialEq)]
struct RunConfig {
    /// the level file to load
    level: PathBuf,
    /// the Waypoint to start from
    source: char,
    /// the Waypoint to search a Path to
    destination: char,
    /// where to write the costs from `source` to every reachable Space
    output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            level: PathBuf::from("levels/example.txt"),
            source: 'a',
            destination: 'e',
            output: PathBuf::from("my_costs.csv"),
        }
    }
}

impl RunConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<RunConfig, String> {
        let def = RunConfig::default();
        let waypoint = |arg: Option<String>, default: char| match arg {
            None => Ok(default),
            Some(arg) => {
                let mut chars = arg.chars();
                match (chars.next(), chars.next()) {
                    (Some(name), None) => Ok(name),
                    _ => Err(format!("a waypoint is a single character, got {:?}", arg)),
                }
            }
        };
        let level = args.next().map(PathBuf::from).unwrap_or(def.level);
        let source = waypoint(args.next(), def.source)?;
        let destination = waypoint(args.next(), def.destination)?;
        let output = args.next().map(PathBuf::from).unwrap_or(def.output);
        if let Some(extra) = args.next() {
            return Err(format!("unexpected argument {:?}", extra));
        }
        Ok(RunConfig {
            level,
            source,
            destination,
            output,
        })
    }
}

/// Searches for a Path between two Waypoints and prints it over the level.
fn show_route(level: &Level, source: char, destination: char) -> Result<(), Box<dyn Error>> {
    let src = level.waypoint(source)?;
    let dst = level.waypoint(destination)?;

    match shortest_path(src, dst, level, navigation_edges)? {
        Some(path) => {
            info!("{} -> {}: {}", source, destination, path);
            println!("{}", level.show(Some(&path.path[..])));
        }
        None => {
            warn!("{} -> {}: destination unreachable", source, destination);
            println!("No path possible!");
        }
    }
    Ok(())
}

/// Calculates the cost to all reachable Spaces from a Waypoint and saves them as CSV.
fn save_costs(level: &Level, source: char, output: &Path) -> Result<(), Box<dyn Error>> {
    let src = level.waypoint(source)?;
    let costs = shortest_path_to_all(src, level, navigation_edges)?;
    save_level_costs(level, &costs, output)?;
    info!("saved {} costs from {} to {:?}", costs.len(), source, output);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default()
        .filter_or("LEVEL_LOG", "info")
        .write_style_or("LEVEL_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    info!("running {:?}", config);

    let level = Level::load(&config.level)?;
    println!("{}", level);

    show_route(&level, config.source, config.destination)?;
    save_costs(&level, config.source, &config.output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults() {
        assert_eq!(RunConfig::from_args(args(&[])), Ok(RunConfig::default()));
    }

    #[test]
    fn overrides() {
        let config = RunConfig::from_args(args(&["maze.txt", "b", "d", "out.csv"])).unwrap();
        assert_eq!(
            config,
            RunConfig {
                level: PathBuf::from("maze.txt"),
                source: 'b',
                destination: 'd',
                output: PathBuf::from("out.csv"),
            }
        );
    }

    #[test]
    fn rejects_long_waypoint() {
        assert!(RunConfig::from_args(args(&["maze.txt", "ab"])).is_err());
        assert!(RunConfig::from_args(args(&["maze.txt", "a", "b", "o.csv", "extra"])).is_err());
    }
}
