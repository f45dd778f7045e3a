use crate::error::SearchError;
use crate::search::{self, StateSpace};
use crate::stat::Stats;

/// Height map with a marked trailhead and summit, heights 0 (`a`) to 25
/// (`z`). A step is allowed onto a cell at most one unit higher than the
/// current one; drops of any size are fine.
#[derive(Debug, Clone)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    heights: Vec<Vec<u8>>,
    pub start: (usize, usize),
    pub summit: (usize, usize),
}

impl Grid {
    /// Builds a grid from its character form: `a`..`z` heights, `S` the
    /// trailhead (height `a`), `E` the summit (height `z`).
    pub fn from_ascii(raw: &str) -> Result<Self, SearchError> {
        let mut heights: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut summit = None;

        for (row, line) in raw.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let h = match ch {
                    'S' => {
                        start = Some((row, col));
                        0
                    }
                    'E' => {
                        summit = Some((row, col));
                        25
                    }
                    'a'..='z' => ch as u8 - b'a',
                    other => {
                        return Err(SearchError::InvalidState(format!(
                            "unexpected grid character {other:?}"
                        )))
                    }
                };
                cells.push(h);
            }
            // The neighbor rule indexes against one shared width.
            if let Some(first) = heights.first() {
                if cells.len() != first.len() {
                    return Err(SearchError::InvalidState(format!(
                        "grid row {row} is {} cells wide, expected {}",
                        cells.len(),
                        first.len()
                    )));
                }
            }
            heights.push(cells);
        }

        let start =
            start.ok_or_else(|| SearchError::InvalidState("grid has no start marker".into()))?;
        let summit =
            summit.ok_or_else(|| SearchError::InvalidState("grid has no summit marker".into()))?;

        Ok(Grid {
            height: heights.len(),
            width: heights.first().map_or(0, |row| row.len()),
            heights,
            start,
            summit,
        })
    }

    pub fn height_at(&self, (row, col): (usize, usize)) -> u8 {
        self.heights[row][col]
    }

    fn neighbors4(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let directions = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut neighbors = Vec::new();

        for &(dr, dc) in &directions {
            let new_row = row as i32 + dr;
            let new_col = col as i32 + dc;
            if new_row >= 0
                && new_col >= 0
                && new_row < self.height as i32
                && new_col < self.width as i32
            {
                neighbors.push((new_row as usize, new_col as usize));
            }
        }

        neighbors
    }

    /// Fewest steps from the trailhead to the summit.
    pub fn shortest_climb(&self, stats: &mut Stats) -> Result<usize, SearchError> {
        search::shortest_path(&Ascent { grid: self }, self.start, stats)
    }

    /// Fewest steps from the summit down to any ground-level cell, walking
    /// the climb rule in reverse.
    pub fn shortest_descent_to_ground(&self, stats: &mut Stats) -> Result<usize, SearchError> {
        search::shortest_path(&Descent { grid: self }, self.summit, stats)
    }
}

/// Forward walk: goal is the summit, climbs limited to one unit.
pub struct Ascent<'a> {
    pub grid: &'a Grid,
}

impl StateSpace for Ascent<'_> {
    type State = (usize, usize);

    fn neighbors(&self, &(row, col): &Self::State, _step: usize) -> Vec<(usize, usize)> {
        let here = self.grid.height_at((row, col));
        self.grid
            .neighbors4(row, col)
            .into_iter()
            .filter(|&next| self.grid.height_at(next) <= here + 1)
            .collect()
    }

    fn is_goal(&self, state: &Self::State, _step: usize) -> bool {
        *state == self.grid.summit
    }
}

/// Backward walk from the summit: the climb rule flips (drops limited to one
/// unit) and any ground-level cell is a goal.
pub struct Descent<'a> {
    pub grid: &'a Grid,
}

impl StateSpace for Descent<'_> {
    type State = (usize, usize);

    fn neighbors(&self, &(row, col): &Self::State, _step: usize) -> Vec<(usize, usize)> {
        let here = self.grid.height_at((row, col));
        self.grid
            .neighbors4(row, col)
            .into_iter()
            .filter(|&next| self.grid.height_at(next) + 1 >= here)
            .collect()
    }

    fn is_goal(&self, state: &Self::State, _step: usize) -> bool {
        self.grid.height_at(*state) == 0
    }
}
