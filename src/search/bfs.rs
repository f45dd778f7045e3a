use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument};

use super::StateSpace;
use crate::error::SearchError;
use crate::stat::Stats;

/// Breadth-first search with a per-state clock: each state carries its own
/// distance from the start, and the space is asked for neighbors at the step
/// those neighbors are entered. Returns the smallest number of transitions
/// from `start` to any goal state.
///
/// Every discovered state is tested against the goal before it enters the
/// frontier, so a goal is reported one layer earlier than its expansion.
/// Exhausting a finite space without meeting the goal yields `Unreachable`.
#[instrument(skip_all, name = "bfs", level = "debug")]
pub fn shortest_path<S: StateSpace>(
    space: &S,
    start: S::State,
    stats: &mut Stats,
) -> Result<usize, SearchError> {
    if space.is_goal(&start, 0) {
        return Ok(0);
    }

    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();

    visited.insert(start.clone());
    frontier.push_back((start, 0));

    while let Some((current, distance)) = frontier.pop_front() {
        stats.expanded_nodes += 1;

        // All edges cost 1, so neighbors of a distance-d state live at d+1.
        let step = distance + 1;
        for neighbor in space.neighbors(&current, step) {
            if visited.contains(&neighbor) {
                continue;
            }
            if space.is_goal(&neighbor, step) {
                debug!("goal reached at distance {step}");
                return Ok(step);
            }
            visited.insert(neighbor.clone());
            frontier.push_back((neighbor, step));
        }
    }

    Err(SearchError::Unreachable)
}

/// Breadth-first search with a single shared clock: the whole frontier
/// advances one step per layer, as when all candidates move through the same
/// time-varying obstacle field. There is no visited set, since a state
/// blocked on one turn may be free on a later one.
///
/// Returns the absolute step number at which a goal state is first entered,
/// counting from `starting_step` (so legs of a longer journey can chain).
/// An empty next layer yields `Unreachable`; on a cyclic space where the
/// goal is never reachable the search does not terminate, which the caller
/// must rule out or bound externally.
#[instrument(skip_all, name = "bfs_synced", level = "debug")]
pub fn shortest_path_synced<S: StateSpace>(
    space: &S,
    start: S::State,
    starting_step: usize,
    stats: &mut Stats,
) -> Result<usize, SearchError> {
    if space.is_goal(&start, starting_step) {
        return Ok(starting_step);
    }

    let mut layer = HashSet::new();
    layer.insert(start);

    let mut step = starting_step;
    loop {
        step += 1;
        let mut next = HashSet::new();

        for state in &layer {
            stats.expanded_nodes += 1;
            for neighbor in space.neighbors(state, step) {
                if space.is_goal(&neighbor, step) {
                    debug!("goal reached at step {step}");
                    return Ok(step);
                }
                next.insert(neighbor);
            }
        }

        if next.is_empty() {
            return Err(SearchError::Unreachable);
        }
        layer = next;
    }
}
