use tracing::instrument;

use crate::search::{self, TurnSpace};
use crate::stat::Stats;
use crate::state::Dominance;

/// Robot costs of one blueprint. Every bot takes one turn to build and
/// gathers one unit of its resource per turn from the turn after.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    pub ore_bot_ore: usize,
    pub clay_bot_ore: usize,
    pub obsidian_bot_ore: usize,
    pub obsidian_bot_clay: usize,
    pub geode_bot_ore: usize,
    pub geode_bot_obsidian: usize,
}

/// Bots and stockpiles after some number of turns. Field order matters: the
/// derived `Ord` sorts by bots before resources, geodes first, which is the
/// order the dominance sweep walks the frontier in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RobotState {
    pub geode_bot: usize,
    pub obsidian_bot: usize,
    pub clay_bot: usize,
    pub ore_bot: usize,
    pub geode: usize,
    pub obsidian: usize,
    pub clay: usize,
    pub ore: usize,
}

impl RobotState {
    /// The opening position: one ore bot and empty stockpiles.
    pub fn initial() -> Self {
        RobotState {
            ore_bot: 1,
            ..RobotState::default()
        }
    }
}

impl Dominance for RobotState {
    fn better_than(&self, other: &Self) -> bool {
        self.geode_bot >= other.geode_bot
            && self.obsidian_bot >= other.obsidian_bot
            && self.clay_bot >= other.clay_bot
            && self.ore_bot >= other.ore_bot
            && self.geode >= other.geode
            && self.obsidian >= other.obsidian
            && self.clay >= other.clay
            && self.ore >= other.ore
    }
}

impl Blueprint {
    /// Most geodes this blueprint can crack within `turns`.
    #[instrument(skip_all, level = "debug")]
    pub fn max_geodes(&self, turns: usize, stats: &mut Stats) -> usize {
        let started = std::time::Instant::now();
        let best = search::max_score(self, RobotState::initial(), turns, stats);

        stats.time_us += started.elapsed().as_micros() as usize;
        stats.print();
        best
    }

    fn max_ore_use(&self) -> usize {
        self.ore_bot_ore
            .max(self.clay_bot_ore)
            .max(self.obsidian_bot_ore)
            .max(self.geode_bot_ore)
    }

    /// Caps stockpiles the race can no longer spend fast enough, so states
    /// that differ only in unusable surplus collapse together.
    fn cap_resources(&self, mut state: RobotState) -> RobotState {
        state.ore = state.ore.min(self.max_ore_use() * 2);
        state.clay = state.clay.min(self.obsidian_bot_clay * 2);
        state.obsidian = state.obsidian.min(self.geode_bot_obsidian * 2);
        state
    }
}

impl TurnSpace for Blueprint {
    type State = RobotState;

    fn successors(&self, state: &RobotState) -> Vec<RobotState> {
        let mut out = Vec::new();

        // Build at most one bot per turn; never stack more bots of a type
        // than its resource can be spent per turn, geode bots excepted.
        if state.ore >= self.geode_bot_ore && state.obsidian >= self.geode_bot_obsidian {
            let mut next = *state;
            next.ore -= self.geode_bot_ore;
            next.obsidian -= self.geode_bot_obsidian;
            next.geode_bot += 1;
            out.push(next);
        }
        if state.ore >= self.obsidian_bot_ore
            && state.clay >= self.obsidian_bot_clay
            && state.obsidian_bot < self.geode_bot_obsidian
        {
            let mut next = *state;
            next.ore -= self.obsidian_bot_ore;
            next.clay -= self.obsidian_bot_clay;
            next.obsidian_bot += 1;
            out.push(next);
        }
        if state.ore >= self.clay_bot_ore && state.clay_bot < self.obsidian_bot_clay {
            let mut next = *state;
            next.ore -= self.clay_bot_ore;
            next.clay_bot += 1;
            out.push(next);
        }
        if state.ore >= self.ore_bot_ore && state.ore_bot < self.max_ore_use() {
            let mut next = *state;
            next.ore -= self.ore_bot_ore;
            next.ore_bot += 1;
            out.push(next);
        }
        // Or just gather.
        out.push(*state);

        // Bots that existed at the start of the turn gather afterwards.
        out.into_iter()
            .map(|mut next| {
                next.geode += state.geode_bot;
                next.obsidian += state.obsidian_bot;
                next.clay += state.clay_bot;
                next.ore += state.ore_bot;
                self.cap_resources(next)
            })
            .collect()
    }

    fn score(&self, state: &RobotState) -> usize {
        state.geode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_blueprint() -> Blueprint {
        Blueprint {
            ore_bot_ore: 4,
            clay_bot_ore: 2,
            obsidian_bot_ore: 3,
            obsidian_bot_clay: 14,
            geode_bot_ore: 2,
            geode_bot_obsidian: 7,
        }
    }

    #[test]
    fn test_opening_turn_only_gathers() {
        let blueprint = example_blueprint();
        let successors = blueprint.successors(&RobotState::initial());

        // Nothing is affordable with 0 ore, so the only move is gathering.
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].ore, 1);
        assert_eq!(successors[0].ore_bot, 1);
    }

    #[test]
    fn test_builder_pays_before_gathering() {
        let blueprint = example_blueprint();
        let state = RobotState {
            ore_bot: 1,
            ore: 2,
            ..RobotState::default()
        };
        let successors = blueprint.successors(&state);

        // Affordable: clay bot or idle.
        assert_eq!(successors.len(), 2);
        let built = successors.iter().find(|s| s.clay_bot == 1).unwrap();
        assert_eq!(built.ore, 1); // paid 2, gathered 1
    }

    #[test]
    fn test_bot_counts_are_capped() {
        let blueprint = example_blueprint();
        // Already harvesting more ore per turn than any recipe can spend.
        let state = RobotState {
            ore_bot: 4,
            ore: 8,
            ..RobotState::default()
        };
        let successors = blueprint.successors(&state);
        assert!(successors.iter().all(|s| s.ore_bot == 4));
    }

    #[test]
    fn test_example_blueprint_24_turns() {
        let blueprint = example_blueprint();
        let best = blueprint.max_geodes(24, &mut Stats::default());
        assert_eq!(best, 9);
    }

    #[test]
    fn test_example_blueprint_32_turns() {
        let blueprint = example_blueprint();
        let best = blueprint.max_geodes(32, &mut Stats::default());
        assert_eq!(best, 56);
    }

    #[test]
    fn test_zero_turns_zero_geodes() {
        let blueprint = example_blueprint();
        assert_eq!(blueprint.max_geodes(0, &mut Stats::default()), 0);
    }
}
