use std::collections::HashSet;

use tracing::{debug, instrument};

use super::TurnSpace;
use crate::stat::Stats;

/// Runs a turn-by-turn race for `turns` rounds and returns the best score
/// reached. The whole set of reachable states is kept as the frontier; after
/// every round it is pruned by dominance, which keeps the race polynomial
/// instead of exponential in the turn count.
///
/// With `turns == 0` the answer is the initial state's accumulated score.
/// A state with no successors drops out of the frontier, but its accumulated
/// score stays a candidate answer (the branch scores nothing more for the
/// remaining turns). Once every branch is dead the race ends early.
#[instrument(skip_all, name = "frontier_race", level = "debug")]
pub fn max_score<S: TurnSpace>(
    space: &S,
    initial: S::State,
    turns: usize,
    stats: &mut Stats,
) -> usize {
    let mut best = space.score(&initial);
    let mut frontier = HashSet::new();
    frontier.insert(initial);

    for turn in 0..turns {
        let mut next = HashSet::new();
        for state in &frontier {
            stats.expanded_nodes += 1;
            next.extend(space.successors(state));
        }

        if next.is_empty() {
            debug!("race over after {turn} turns, every branch is dead");
            return best;
        }

        frontier = crate::state::prune_dominated(next, stats);
        best = best.max(frontier.iter().map(|s| space.score(s)).max().unwrap_or(0));
    }

    debug!("final frontier holds {} states", frontier.len());
    best
}
