use crate::board::CellState;

/// Neighbour counts that bring a dead cell to life (`birth`) or keep a live one alive (`survive`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    /// B3/S23.
    pub fn conway() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }

    pub fn next_state(&self, current: CellState, live_neighbors: usize) -> CellState {
        let alive = match current {
            CellState::Alive => self.survive.contains(&live_neighbors),
            CellState::Dead => self.birth.contains(&live_neighbors),
        };

        CellState::from(alive)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}
