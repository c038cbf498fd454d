use itertools::iproduct;
use log::trace;

use crate::{board::Grid, pos::Position, rule::Rule};

/// Computes the next generation. Only `grid` is read; the result is a fresh grid of the same size.
///
/// Neighbours beyond the edges don't exist, there's no wraparound.
pub fn step(grid: &Grid, rule: &Rule) -> Grid {
    let next_cells = grid
        .enumerate_cells()
        .map(|(pos, cell)| rule.next_state(cell, live_neighbors(grid, pos)))
        .collect();

    let next = Grid::with_cells(grid.width(), grid.height(), next_cells)
        .expect("next generation has the same dimensions as the current one");

    trace!(
        "stepped {}x{} grid, {} -> {} live cells",
        grid.width(),
        grid.height(),
        grid.live_count(),
        next.live_count()
    );

    next
}

/// Live cells among the up to eight in-bounds neighbours of `pos`.
pub fn live_neighbors(grid: &Grid, pos: Position) -> usize {
    iproduct!(-1isize..=1, -1isize..=1)
        .filter(|&offset| offset != (0, 0))
        .filter_map(|(dx, dy)| grid.get(pos.offset(dx, dy)?))
        .filter(|cell| cell.is_alive())
        .count()
}
