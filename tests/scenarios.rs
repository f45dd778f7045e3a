use search_rust::basin::Basin;
use search_rust::factory::Blueprint;
use search_rust::grid::Grid;
use search_rust::valve::{Valve, ValveNetwork};
use search_rust::Stats;

use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn height_grid_climb_and_descent() {
    init_tracing();
    let grid = Grid::from_ascii("Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi").unwrap();
    let mut stats = Stats::default();

    assert_eq!(grid.shortest_climb(&mut stats).unwrap(), 31);
    assert_eq!(grid.shortest_descent_to_ground(&mut stats).unwrap(), 29);
    assert!(stats.expanded_nodes > 0);
}

#[test]
fn blizzard_basin_crossing_and_round_trip() {
    init_tracing();
    let basin =
        Basin::from_ascii("#.######\n#>>.<^<#\n#.<..<<#\n#>v.><>#\n#<^v^^>#\n######.#").unwrap();

    assert_eq!(basin.shortest_crossing(&mut Stats::default()).unwrap(), 18);
    assert_eq!(basin.round_trip(&mut Stats::default()).unwrap(), 54);
}

#[test]
fn valve_network_pressure_race() {
    init_tracing();
    let scan = [
        ("AA", 0, vec!["DD", "II", "BB"]),
        ("BB", 13, vec!["CC", "AA"]),
        ("CC", 2, vec!["DD", "BB"]),
        ("DD", 20, vec!["CC", "AA", "EE"]),
        ("EE", 3, vec!["FF", "DD"]),
        ("FF", 0, vec!["EE", "GG"]),
        ("GG", 0, vec!["FF", "HH"]),
        ("HH", 22, vec!["GG"]),
        ("II", 0, vec!["AA", "JJ"]),
        ("JJ", 21, vec!["II"]),
    ];
    let valves: Vec<Valve> = scan
        .into_iter()
        .map(|(name, rate, tunnels)| Valve {
            name: name.into(),
            rate,
            tunnels: tunnels.into_iter().map(String::from).collect(),
        })
        .collect();
    let network = ValveNetwork::new(&valves, &mut Stats::default()).unwrap();

    assert_eq!(network.most_pressure(30, &mut Stats::default()), 1651);
    assert_eq!(
        network.most_pressure_with_partner(26, &mut Stats::default()),
        1707
    );
}

#[test]
fn robot_factory_geode_race() {
    init_tracing();
    let blueprint = Blueprint {
        ore_bot_ore: 4,
        clay_bot_ore: 2,
        obsidian_bot_ore: 3,
        obsidian_bot_clay: 14,
        geode_bot_ore: 2,
        geode_bot_obsidian: 7,
    };

    let mut stats = Stats::default();
    assert_eq!(blueprint.max_geodes(24, &mut stats), 9);
    assert!(stats.pruned_states > 0);
}
