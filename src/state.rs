use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::stat::Stats;

/// Component-wise partial order over resource-like states.
///
/// `a.better_than(b)` must hold only when every tracked field of `a` is >=
/// the corresponding field of `b`; any future achievable from `b` is then
/// also achievable from `a`, so `b` can be dropped from a frontier without
/// changing the optimal score.
pub trait Dominance {
    fn better_than(&self, other: &Self) -> bool;
}

/// Sweeps a frontier and drops states dominated by a stronger one.
///
/// Sorts descending and keeps a running champion; a state is removed only
/// when the champion dominates it, so the result is sound (never removes a
/// non-dominated state) though not guaranteed minimal.
pub fn prune_dominated<T>(states: HashSet<T>, stats: &mut Stats) -> HashSet<T>
where
    T: Dominance + Ord + Hash,
{
    if states.len() < 2 {
        return states;
    }

    let before = states.len();
    let mut kept = HashSet::new();
    let mut sorted = states.into_iter().sorted().rev();

    // The sort puts each state's strongest lookalikes right before it.
    let mut champion = sorted.next().unwrap();
    for state in sorted {
        if champion.better_than(&state) {
            continue;
        }
        kept.insert(champion);
        champion = state;
    }
    kept.insert(champion);

    stats.pruned_states += before - kept.len();
    debug!("pruned frontier from {before} to {} states", kept.len());
    kept
}
