use std::collections::HashMap;

use tracing::{debug, instrument};

use super::DecisionSpace;
use crate::stat::Stats;

/// Maximizes the score of a race whose moves jump straight between decision
/// points, each jump consuming several turns at once.
///
/// Recursion over `(state, remaining)` with an explicit memo table owned by
/// this invocation, so independent queries never contaminate each other.
/// With fewer than two turns left no jump can still pay off (the cheapest
/// meaningful jump spends a turn and needs at least one more to score), so
/// the recursion bottoms out at zero.
#[instrument(skip_all, name = "memo_race", level = "debug")]
pub fn best_score<D: DecisionSpace>(
    space: &D,
    initial: D::State,
    turns: usize,
    stats: &mut Stats,
) -> usize {
    let mut memo = HashMap::new();
    let best = search(space, &initial, turns, &mut memo, stats);
    debug!("memo table holds {} entries", memo.len());
    best
}

fn search<D: DecisionSpace>(
    space: &D,
    state: &D::State,
    remaining: usize,
    memo: &mut HashMap<(D::State, usize), usize>,
    stats: &mut Stats,
) -> usize {
    if remaining < 2 {
        return 0;
    }
    if let Some(&cached) = memo.get(&(state.clone(), remaining)) {
        stats.memo_hits += 1;
        return cached;
    }
    stats.expanded_nodes += 1;

    let mut best = 0;
    for (successor, spent, gained) in space.choices(state, remaining) {
        if spent > remaining {
            continue;
        }
        best = best.max(gained + search(space, &successor, remaining - spent, memo, stats));
    }

    memo.insert((state.clone(), remaining), best);
    best
}
