use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::SearchError;
use crate::search::{self, DecisionSpace, StateSpace};
use crate::stat::Stats;

/// One valve as declared by the scan: its name, flow rate per minute once
/// opened, and the tunnels leading away from it.
#[derive(Debug, Clone)]
pub struct Valve {
    pub name: String,
    pub rate: usize,
    pub tunnels: Vec<String>,
}

/// Tunnel network with precomputed travel times between the start valve and
/// every valve worth opening. Moves in the pressure race jump straight from
/// one opening to the next instead of stepping tunnel by tunnel, which keeps
/// the branching factor at the number of still-closed useful valves.
#[derive(Debug, Clone)]
pub struct ValveNetwork {
    rates: Vec<usize>,
    // Valves with a positive flow rate, as indices into `rates`.
    useful: Vec<usize>,
    start: usize,
    travel: HashMap<(usize, usize), usize>,
}

pub const START_VALVE: &str = "AA";

impl ValveNetwork {
    pub fn new(valves: &[Valve], stats: &mut Stats) -> Result<Self, SearchError> {
        if let Some(name) = valves.iter().map(|v| v.name.as_str()).duplicates().next() {
            return Err(SearchError::InvalidState(format!(
                "valve {name} declared twice"
            )));
        }

        let ids: HashMap<&str, usize> = valves
            .iter()
            .enumerate()
            .map(|(id, valve)| (valve.name.as_str(), id))
            .collect();
        let start = *ids
            .get(START_VALVE)
            .ok_or_else(|| SearchError::InvalidState(format!("no {START_VALVE} valve")))?;

        let mut adjacency = vec![Vec::new(); valves.len()];
        for (id, valve) in valves.iter().enumerate() {
            for tunnel in &valve.tunnels {
                let target = *ids.get(tunnel.as_str()).ok_or_else(|| {
                    SearchError::InvalidState(format!(
                        "valve {} leads to unknown valve {tunnel}",
                        valve.name
                    ))
                })?;
                adjacency[id].push(target);
            }
        }

        let rates: Vec<usize> = valves.iter().map(|valve| valve.rate).collect();
        let useful: Vec<usize> = (0..valves.len()).filter(|&id| rates[id] > 0).collect();

        // Pairwise travel times over the tunnel graph, one BFS per pair.
        let mut travel = HashMap::new();
        for &from in useful.iter().chain([&start]) {
            for &to in &useful {
                if from == to {
                    continue;
                }
                let tunnels = Tunnels {
                    adjacency: &adjacency,
                    to,
                };
                let distance = search::shortest_path(&tunnels, from, stats)?;
                travel.insert((from, to), distance);
            }
        }

        Ok(ValveNetwork {
            rates,
            useful,
            start,
            travel,
        })
    }

    fn full_mask(&self) -> u64 {
        (1 << self.useful.len()) - 1
    }

    /// Most pressure a single agent can release within `minutes`.
    #[instrument(skip_all, level = "debug")]
    pub fn most_pressure(&self, minutes: usize, stats: &mut Stats) -> usize {
        let started = std::time::Instant::now();
        let race = PressureRace {
            network: self,
            allowed: self.full_mask(),
        };
        let best = search::best_score(&race, ValveState::start(self.start), minutes, stats);

        stats.time_us += started.elapsed().as_micros() as usize;
        stats.print();
        best
    }

    /// Most pressure two agents working simultaneously can release within
    /// `minutes`. Since each valve is only worth opening once, the agents
    /// split the useful valves into two disjoint subsets; every split is
    /// scored as two independent single-agent races.
    #[instrument(skip_all, level = "debug")]
    pub fn most_pressure_with_partner(&self, minutes: usize, stats: &mut Stats) -> usize {
        let started = std::time::Instant::now();
        let full = self.full_mask();

        let best_for: Vec<usize> = (0..=full)
            .map(|allowed| {
                let race = PressureRace {
                    network: self,
                    allowed,
                };
                search::best_score(&race, ValveState::start(self.start), minutes, stats)
            })
            .collect();

        let mut best = 0;
        for mine in 0..=full {
            let theirs = full ^ mine;
            best = best.max(best_for[mine as usize] + best_for[theirs as usize]);
        }
        debug!("best split over {} subsets: {best}", full + 1);

        stats.time_us += started.elapsed().as_micros() as usize;
        stats.print();
        best
    }
}

/// Tunnel graph as a plain BFS space, used for the travel-time matrix.
struct Tunnels<'a> {
    adjacency: &'a [Vec<usize>],
    to: usize,
}

impl StateSpace for Tunnels<'_> {
    type State = usize;

    fn neighbors(&self, valve: &usize, _step: usize) -> Vec<usize> {
        self.adjacency[*valve].clone()
    }

    fn is_goal(&self, valve: &usize, _step: usize) -> bool {
        *valve == self.to
    }
}

/// Where an agent stands and which useful valves are already open (bit `i`
/// covers the i-th useful valve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValveState {
    position: usize,
    opened: u64,
}

impl ValveState {
    fn start(position: usize) -> Self {
        ValveState {
            position,
            opened: 0,
        }
    }
}

struct PressureRace<'a> {
    network: &'a ValveNetwork,
    allowed: u64,
}

impl DecisionSpace for PressureRace<'_> {
    type State = ValveState;

    fn choices(&self, state: &ValveState, remaining: usize) -> Vec<(ValveState, usize, usize)> {
        let mut out = Vec::new();

        for (bit, &valve) in self.network.useful.iter().enumerate() {
            if self.allowed & (1 << bit) == 0 || state.opened & (1 << bit) != 0 {
                continue;
            }
            // Walk there and spend a minute opening; the valve then flows
            // for whatever is left of the clock.
            let spent = self.network.travel[&(state.position, valve)] + 1;
            if spent >= remaining {
                continue;
            }
            let gained = self.network.rates[valve] * (remaining - spent);
            out.push((
                ValveState {
                    position: valve,
                    opened: state.opened | (1 << bit),
                },
                spent,
                gained,
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valve(name: &str, rate: usize, tunnels: &[&str]) -> Valve {
        Valve {
            name: name.into(),
            rate,
            tunnels: tunnels.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn example_network() -> Vec<Valve> {
        vec![
            valve("AA", 0, &["DD", "II", "BB"]),
            valve("BB", 13, &["CC", "AA"]),
            valve("CC", 2, &["DD", "BB"]),
            valve("DD", 20, &["CC", "AA", "EE"]),
            valve("EE", 3, &["FF", "DD"]),
            valve("FF", 0, &["EE", "GG"]),
            valve("GG", 0, &["FF", "HH"]),
            valve("HH", 22, &["GG"]),
            valve("II", 0, &["AA", "JJ"]),
            valve("JJ", 21, &["II"]),
        ]
    }

    #[test]
    fn test_travel_times() {
        let network = ValveNetwork::new(&example_network(), &mut Stats::default()).unwrap();
        // AA=0, DD=3, HH=7, JJ=9 in declaration order.
        assert_eq!(network.travel[&(0, 3)], 1);
        assert_eq!(network.travel[&(0, 7)], 5);
        assert_eq!(network.travel[&(3, 9)], 3);
    }

    #[test]
    fn test_rejects_unknown_tunnel() {
        let valves = vec![valve("AA", 0, &["ZZ"])];
        assert!(matches!(
            ValveNetwork::new(&valves, &mut Stats::default()),
            Err(SearchError::InvalidState(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_valve() {
        let valves = vec![valve("AA", 0, &[]), valve("AA", 4, &[])];
        assert!(matches!(
            ValveNetwork::new(&valves, &mut Stats::default()),
            Err(SearchError::InvalidState(_))
        ));
    }

    #[test]
    fn test_most_pressure_single_agent() {
        let network = ValveNetwork::new(&example_network(), &mut Stats::default()).unwrap();
        let best = network.most_pressure(30, &mut Stats::default());
        assert_eq!(best, 1651);
    }

    #[test]
    fn test_most_pressure_with_partner() {
        let network = ValveNetwork::new(&example_network(), &mut Stats::default()).unwrap();
        let best = network.most_pressure_with_partner(26, &mut Stats::default());
        assert_eq!(best, 1707);
    }

    #[test]
    fn test_no_time_means_no_pressure() {
        let network = ValveNetwork::new(&example_network(), &mut Stats::default()).unwrap();
        assert_eq!(network.most_pressure(0, &mut Stats::default()), 0);
        assert_eq!(network.most_pressure(1, &mut Stats::default()), 0);
    }
}
