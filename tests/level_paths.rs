use level_pathfinding::prelude::*;
use std::f64::consts::SQRT_2;

const EXAMPLE: &str = include_str!("../levels/example.txt");

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: Cost, b: Cost) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn route_between_waypoints() {
    init();
    let level: Level = EXAMPLE.parse().unwrap();
    let waypoints = ['a', 'b', 'c', 'd', 'e'];

    for &from in &waypoints {
        for &to in &waypoints {
            let source = level.waypoint(from).unwrap();
            let destination = level.waypoint(to).unwrap();
            let path = shortest_path(source, destination, &level, navigation_edges)
                .unwrap()
                .unwrap_or_else(|| panic!("no path from {} to {}", from, to));

            assert_eq!(path.start(), Some(&source));
            assert_eq!(path.end(), Some(&destination));
            assert!(path.iter().all(|&cell| level.weight(cell).is_some()));

            let recomputed = level.path_cost(&path).unwrap();
            assert!(approx(recomputed, path.cost));
        }
    }
}

#[test]
fn path_matches_cost_map() {
    init();
    let level: Level = EXAMPLE.parse().unwrap();
    let source = level.waypoint('a').unwrap();
    let costs = shortest_path_to_all(source, &level, navigation_edges).unwrap();

    // every space of the example is connected
    assert_eq!(costs.len(), level.spaces().len());
    assert_eq!(costs[&source], 0.0);

    for name in ['b', 'c', 'd', 'e'] {
        let destination = level.waypoint(name).unwrap();
        let path = shortest_path(source, destination, &level, navigation_edges)
            .unwrap()
            .unwrap();
        assert!(approx(path.cost, costs[&destination]));
    }
}

#[test]
fn symmetric_costs() {
    init();
    let level: Level = EXAMPLE.parse().unwrap();
    let all = costs_from_waypoints(&level, navigation_edges);

    for (&from, from_costs) in &all {
        for (&to, to_costs) in &all {
            let there = from_costs[&level.waypoint(to).unwrap()];
            let back = to_costs[&level.waypoint(from).unwrap()];
            assert!(approx(there, back), "{} <-> {}: {} != {}", from, to, there, back);
        }
    }
}

#[test]
fn avoids_heavy_region() {
    init();
    let level: Level = EXAMPLE.parse().unwrap();
    let source = level.waypoint('c').unwrap();
    let destination = level.waypoint('e').unwrap();
    let path = shortest_path(source, destination, &level, navigation_edges)
        .unwrap()
        .unwrap();

    assert!(path.iter().all(|&cell| level.weight(cell) != Some(9.0)));
}

#[test]
fn unreachable_island() {
    init();
    let level: Level = "\
a11X11
111X1b
XXXX11"
        .parse()
        .unwrap();
    let source = level.waypoint('a').unwrap();
    let destination = level.waypoint('b').unwrap();

    assert_eq!(
        shortest_path(source, destination, &level, navigation_edges),
        Ok(None)
    );

    let costs = shortest_path_to_all(source, &level, navigation_edges).unwrap();
    assert_eq!(costs.len(), 6);
    assert!(!costs.contains_key(&destination));
}

#[test]
fn uniform_grid_scenarios() {
    init();
    let open: Level = "111\n111\n111".parse().unwrap();
    let blocked: Level = "111\n1X1\n111".parse().unwrap();

    let direct = shortest_path((0, 0), (2, 2), &open, navigation_edges)
        .unwrap()
        .unwrap();
    assert!(approx(direct.cost, 2.0 * SQRT_2));

    let detour = shortest_path((0, 0), (2, 2), &blocked, navigation_edges)
        .unwrap()
        .unwrap();
    assert!(detour.cost > direct.cost);

    let stay = shortest_path((0, 0), (0, 0), &open, navigation_edges)
        .unwrap()
        .unwrap();
    assert_eq!(stay.path, vec![(0, 0)]);
    assert_eq!(stay.cost, 0.0);
}

#[test]
fn show_and_save() {
    init();
    let level: Level = EXAMPLE.parse().unwrap();

    // rendering without a path reproduces the level
    assert_eq!(level.show(None), EXAMPLE);

    let source = level.waypoint('a').unwrap();
    let destination = level.waypoint('e').unwrap();
    let path = shortest_path(source, destination, &level, navigation_edges)
        .unwrap()
        .unwrap();
    let shown = level.show(Some(&path.path[..]));
    assert_eq!(shown.matches('*').count(), path.len());

    let costs = shortest_path_to_all(source, &level, navigation_edges).unwrap();
    let mut out = Vec::new();
    write_level_costs(&level, &costs, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), costs.len() + 1);
}
