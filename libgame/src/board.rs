use crate::error::GameError;

use super::pos::Position;

/// A fixed-size board of cells stored row-major, so `(x, y)` lives at `y * width + x`.
///
/// Cloning a grid deep-copies its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); len],
        })
    }

    pub fn with_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self, GameError> {
        let expected = checked_len(width, height)?;

        if cells.len() != expected {
            return Err(GameError::BitmapSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns `None` outside the grid.
    pub fn get<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn set<P>(&mut self, pos: P, state: CellState) -> Result<(), GameError>
    where
        P: Into<Position>,
    {
        *self.cell_mut(pos)? = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle<P>(&mut self, pos: P) -> Result<CellState, GameError>
    where
        P: Into<Position>,
    {
        let cell = self.cell_mut(pos)?;
        *cell = cell.toggled();
        Ok(*cell)
    }

    /// Kills every cell, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    fn cell_mut<P>(&mut self, pos: P) -> Result<&mut CellState, GameError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let (width, height) = self.dimensions();

        self.pos_to_index(pos)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GameError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width,
                height,
            })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            x: index % self.width,
            y: index / self.width,
        }
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, GameError> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidDimensions { width, height });
    }

    width
        .checked_mul(height)
        .ok_or(GameError::InvalidDimensions { width, height })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
