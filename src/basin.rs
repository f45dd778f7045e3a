use std::collections::HashSet;

use num_integer::Integer;

use crate::error::SearchError;
use crate::search::{self, StateSpace};
use crate::stat::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Walled valley crossed by blizzards that wrap around the inner area. The
/// blizzard layout is periodic with period `lcm(inner_height, inner_width)`,
/// so the occupancy of every future turn is precomputed once up front.
#[derive(Debug, Clone)]
pub struct Basin {
    height: usize,
    width: usize,
    pub start: (usize, usize),
    pub goal: (usize, usize),
    period: usize,
    // Occupied cells per turn, indexed by `turn % period`.
    forecast: Vec<HashSet<(usize, usize)>>,
}

impl Basin {
    /// Builds a basin from its character form: `#` walls with one gap in the
    /// top row (the entrance) and one in the bottom row (the exit), `.` open
    /// ground, and `^`/`>`/`v`/`<` blizzards.
    pub fn from_ascii(raw: &str) -> Result<Self, SearchError> {
        let lines: Vec<&str> = raw.lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.len());
        if height < 3 || width < 3 {
            return Err(SearchError::InvalidState(
                "basin needs walls around an inner area".into(),
            ));
        }

        let mut blizzards = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let direction = match ch {
                    '#' => continue,
                    '.' => {
                        if row == 0 {
                            start = Some((row, col));
                        } else if row == height - 1 {
                            goal = Some((row, col));
                        }
                        continue;
                    }
                    '^' => Direction::Up,
                    '>' => Direction::Right,
                    'v' => Direction::Down,
                    '<' => Direction::Left,
                    other => {
                        return Err(SearchError::InvalidState(format!(
                            "unexpected basin character {other:?}"
                        )))
                    }
                };
                // Blizzards wrap within the inner area; one parked in the
                // wall border has no defined orbit.
                if row == 0 || row == height - 1 || col == 0 || col == width - 1 {
                    return Err(SearchError::InvalidState(format!(
                        "blizzard in the wall border at ({row}, {col})"
                    )));
                }
                blizzards.push(((row, col), direction));
            }
        }

        let start =
            start.ok_or_else(|| SearchError::InvalidState("basin has no entrance gap".into()))?;
        let goal =
            goal.ok_or_else(|| SearchError::InvalidState("basin has no exit gap".into()))?;

        let inner_height = height - 2;
        let inner_width = width - 2;
        let period = inner_height.lcm(&inner_width);

        let forecast = (0..period)
            .map(|turn| {
                blizzards
                    .iter()
                    .map(|&(position, direction)| {
                        blizzard_at(position, direction, turn, inner_height, inner_width)
                    })
                    .collect()
            })
            .collect();

        Ok(Basin {
            height,
            width,
            start,
            goal,
            period,
            forecast,
        })
    }

    /// Cells covered by at least one blizzard on the given turn.
    pub fn occupied(&self, turn: usize) -> &HashSet<(usize, usize)> {
        &self.forecast[turn % self.period]
    }

    fn is_open(&self, row: usize, col: usize) -> bool {
        if (row, col) == self.start || (row, col) == self.goal {
            return true;
        }
        row >= 1 && row < self.height - 1 && col >= 1 && col < self.width - 1
    }

    /// Earliest turn the expedition standing at `from` on `starting_turn`
    /// can reach `to`. The turn number is absolute, so trip legs chain.
    pub fn crossing_time(
        &self,
        from: (usize, usize),
        to: (usize, usize),
        starting_turn: usize,
        stats: &mut Stats,
    ) -> Result<usize, SearchError> {
        search::shortest_path_synced(&Crossing { basin: self, to }, from, starting_turn, stats)
    }

    /// Entrance to exit, leaving on turn 0.
    pub fn shortest_crossing(&self, stats: &mut Stats) -> Result<usize, SearchError> {
        self.crossing_time(self.start, self.goal, 0, stats)
    }

    /// There, back for the snacks, and there again.
    pub fn round_trip(&self, stats: &mut Stats) -> Result<usize, SearchError> {
        let there = self.crossing_time(self.start, self.goal, 0, stats)?;
        let back = self.crossing_time(self.goal, self.start, there, stats)?;
        self.crossing_time(self.start, self.goal, back, stats)
    }
}

/// Where a blizzard that started at `position` sits on turn `n`.
fn blizzard_at(
    (row, col): (usize, usize),
    direction: Direction,
    n: usize,
    inner_height: usize,
    inner_width: usize,
) -> (usize, usize) {
    match direction {
        Direction::Up => {
            let shift = n % inner_height;
            (1 + (row - 1 + inner_height - shift) % inner_height, col)
        }
        Direction::Down => (1 + (row - 1 + n % inner_height) % inner_height, col),
        Direction::Right => (row, 1 + (col - 1 + n % inner_width) % inner_width),
        Direction::Left => {
            let shift = n % inner_width;
            (row, 1 + (col - 1 + inner_width - shift) % inner_width)
        }
    }
}

/// One trip through the basin, advanced on the shared BFS clock: every move
/// (or wait) lands on a cell that must be open on the turn it is entered.
pub struct Crossing<'a> {
    pub basin: &'a Basin,
    pub to: (usize, usize),
}

impl StateSpace for Crossing<'_> {
    type State = (usize, usize);

    fn neighbors(&self, &(row, col): &Self::State, step: usize) -> Vec<(usize, usize)> {
        let occupied = self.basin.occupied(step);
        let moves = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut out = Vec::new();

        for &(dr, dc) in &moves {
            let new_row = row as i32 + dr;
            let new_col = col as i32 + dc;
            if new_row < 0 || new_col < 0 {
                continue;
            }
            let cell = (new_row as usize, new_col as usize);
            if self.basin.is_open(cell.0, cell.1) && !occupied.contains(&cell) {
                out.push(cell);
            }
        }

        out
    }

    fn is_goal(&self, state: &Self::State, _step: usize) -> bool {
        *state == self.to
    }
}
