mod bfs;
mod frontier;
mod memo;

pub use bfs::{shortest_path, shortest_path_synced};
pub use frontier::max_score;
pub use memo::best_score;

use std::hash::Hash;

use crate::state::Dominance;

/// A discrete state space explored breadth-first.
///
/// `step` is the turn number at which the returned states are entered, so
/// spaces with time-varying obstacles can rebuild their obstacle mask fresh
/// for every layer. Static spaces simply ignore it.
pub trait StateSpace {
    type State: Clone + Eq + Hash;

    fn neighbors(&self, state: &Self::State, step: usize) -> Vec<Self::State>;

    fn is_goal(&self, state: &Self::State, step: usize) -> bool;
}

/// A state space where every state takes exactly one action per turn and the
/// frontier is kept polynomial by dominance pruning.
pub trait TurnSpace {
    type State: Dominance + Ord + Hash + Clone;

    /// All states reachable in one turn, score accumulation folded into the
    /// state itself. Returning an empty vec ends that branch of the race.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// The score accumulated so far by `state`.
    fn score(&self, state: &Self::State) -> usize;
}

/// A state space whose moves jump straight to the next decision point.
pub trait DecisionSpace {
    type State: Clone + Eq + Hash;

    /// Legal jumps from `state` with `remaining` turns on the clock, as
    /// `(successor, turns_spent, score_gained)`. The gain must already
    /// account for the remaining horizon (e.g. flow rate times the turns the
    /// valve will stay open). Jumps costing more than `remaining` are
    /// skipped by the engine.
    fn choices(&self, state: &Self::State, remaining: usize) -> Vec<(Self::State, usize, usize)>;
}
