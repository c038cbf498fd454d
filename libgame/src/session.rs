use log::debug;

use crate::{
    board::{CellState, Grid},
    error::GameError,
    pos::Position,
    rule::Rule,
    transition,
};

/// A saved grid together with the generation it was saved at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
}

/// What a session mutation did, for the driver to report however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Edited { position: Position, state: CellState },
    Stepped { generation: u64 },
    Cleared,
    Saved { generation: u64 },
    Loaded { generation: u64 },
}

/// The live grid, its generation counter and at most one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: Grid,
    generation: u64,
    saved: Option<Snapshot>,
    rule: Rule,
}

impl Session {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    /// Seeds the grid from row-major cells, `true` being alive.
    pub fn from_bitmap<I>(width: usize, height: usize, initial_cells: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = bool>,
    {
        let cells = initial_cells.into_iter().map(CellState::from).collect();
        Ok(Self::from_grid(Grid::with_cells(width, height, cells)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            current: grid,
            generation: 0,
            saved: None,
            rule: Rule::default(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn get_cell<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        self.current.get(pos)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_saved_state(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    pub fn edit_toggle<P>(&mut self, pos: P) -> Result<SessionEvent, GameError>
    where
        P: Into<Position>,
    {
        let position = pos.into();
        let state = self.current.toggle(position)?;

        debug!("toggled {position} to {state:?}");
        Ok(SessionEvent::Edited { position, state })
    }

    pub fn step(&mut self) -> SessionEvent {
        self.current = transition::step(&self.current, &self.rule);
        self.generation += 1;

        SessionEvent::Stepped {
            generation: self.generation,
        }
    }

    pub fn clear(&mut self) -> SessionEvent {
        self.current.clear();
        self.generation = 0;

        debug!("cleared grid");
        SessionEvent::Cleared
    }

    /// Replaces any previous snapshot with a copy of the current grid.
    pub fn save(&mut self) -> SessionEvent {
        self.saved = Some(Snapshot {
            grid: self.current.clone(),
            generation: self.generation,
        });

        debug!("saved generation {}", self.generation);
        SessionEvent::Saved {
            generation: self.generation,
        }
    }

    /// Restores a copy of the snapshot; the snapshot itself stays for later loads.
    pub fn load(&mut self) -> Result<SessionEvent, GameError> {
        let Snapshot { grid, generation } = self.saved.as_ref().ok_or(GameError::NoSavedState)?;

        self.current = grid.clone();
        self.generation = *generation;

        debug!("loaded generation {generation}");
        Ok(SessionEvent::Loaded {
            generation: self.generation,
        })
    }
}
