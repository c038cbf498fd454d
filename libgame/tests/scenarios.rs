use libgame::{CellState, Position, Session};

const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn live_cells(session: &Session) -> Vec<Position> {
    session
        .grid()
        .enumerate_cells()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(pos, _)| pos)
        .collect()
}

fn seed(session: &mut Session, cells: &[(usize, usize)]) {
    for &cell in cells {
        session.edit_toggle(cell).unwrap();
    }
}

#[test]
fn glider_moves_diagonally_every_four_generations() {
    let mut session = Session::new(8, 8).unwrap();
    seed(&mut session, &GLIDER);

    for _ in 0..4 {
        session.step();
    }

    let mut expected = GLIDER
        .iter()
        .map(|&(x, y)| Position::new(x + 1, y + 1))
        .collect::<Vec<_>>();
    expected.sort_by_key(|pos| (pos.y, pos.x));

    assert_eq!(live_cells(&session), expected);
    assert_eq!(session.generation(), 4);
}

#[test]
fn glider_dies_into_a_block_at_the_corner() {
    let mut session = Session::new(8, 8).unwrap();
    seed(&mut session, &GLIDER);

    // Without wraparound the glider can't leave, it settles against the far corner.
    for _ in 0..40 {
        session.step();
    }
    let settled = session.grid().clone();
    session.step();

    assert_eq!(session.grid(), &settled);
    assert_eq!(session.get_cell((7, 7)), Some(CellState::Alive));
}

#[test]
fn blinker_oscillates() {
    let mut session = Session::new(5, 5).unwrap();
    seed(&mut session, &[(2, 1), (2, 2), (2, 3)]);
    let vertical = session.grid().clone();

    session.step();
    assert_eq!(
        live_cells(&session),
        vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
    );

    session.step();
    assert_eq!(session.grid(), &vertical);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let mut session = Session::new(8, 8).unwrap();
    seed(&mut session, &GLIDER);
    session.step();
    session.save();
    let saved_grid = session.grid().clone();

    for _ in 0..3 {
        session.step();
    }
    session.edit_toggle((7, 0)).unwrap();
    session.edit_toggle((0, 7)).unwrap();
    assert_ne!(session.grid(), &saved_grid);

    session.load().unwrap();

    assert_eq!(session.grid(), &saved_grid);
    assert_eq!(session.generation(), 1);
}

#[test]
fn clear_then_step_stays_empty() {
    let mut session = Session::new(6, 6).unwrap();
    seed(&mut session, &GLIDER);
    session.step();

    session.clear();
    session.step();

    assert!(live_cells(&session).is_empty());
    assert_eq!(session.generation(), 1);
}
