mod renderthing;

use std::{cell::RefCell, rc::Rc, time::Instant};

use libgame::{CellState, Position};
use renderthing::{Renderer, frame::RenderFrame, window::RendererWindowConfig};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::{
    config::ClientConfig,
    state::{Command, State},
};

const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
const ALIVE: [u8; 4] = [255; 4];

pub fn run(state: State, config: &ClientConfig) -> anyhow::Result<()> {
    let title = state.title();

    let renderer_state = Rc::new(RefCell::new(RendererState {
        global_state: state,
        cursor_pos: None,
        width: config.window_width,
        height: config.window_height,
    }));
    let draw_state = renderer_state.clone();
    let event_state = renderer_state;

    let renderer = Renderer::new(RendererWindowConfig {
        title,
        width: config.window_width,
        height: config.window_height,
        target_fps: config.target_fps,
        draw_callback: Box::new(move |frame| draw(&mut draw_state.borrow_mut(), frame)),
        event_callback: Some(Box::new(move |event| {
            let mut renderer_state = event_state.borrow_mut();
            if let Some(command) = on_event(&mut renderer_state, event) {
                renderer_state.global_state.apply(command);
            }
        })),
    })?;

    renderer.run()
}

fn draw(state: &mut RendererState, mut frame: RenderFrame) -> Option<String> {
    state.width = frame.width;
    state.height = frame.height;

    let global_state = &mut state.global_state;
    global_state.tick(Instant::now());

    let grid = global_state.session.grid();
    let (grid_width, grid_height) = grid.dimensions();

    frame.fill(BACKGROUND);

    for (cell_pos, cell) in grid.enumerate_cells() {
        if cell != CellState::Alive {
            continue;
        }

        let (x0, x1) = cell_span(cell_pos.x, grid_width, frame.width);
        let (y0, y1) = cell_span(cell_pos.y, grid_height, frame.height);

        // Keep a one pixel gap between cells when they're big enough to afford it.
        let margin = if x1 - x0 >= 3 && y1 - y0 >= 3 { 1 } else { 0 };

        frame.draw_square(
            x0 + margin,
            y0 + margin,
            (x1 - x0).saturating_sub(margin * 2),
            (y1 - y0).saturating_sub(margin * 2),
            ALIVE,
        );
    }

    global_state.take_title()
}

/// Screen pixels `[start, end)` covered by cell `index` of `cells` spread over `screen` pixels.
fn cell_span(index: usize, cells: usize, screen: u32) -> (u32, u32) {
    let edge = |index: usize| (index as u64 * screen as u64 / cells as u64) as u32;
    (edge(index), edge(index + 1))
}

fn on_event(state: &mut RendererState, event: &WindowEvent) -> Option<Command> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            state.cursor_pos = Some(*position);
            None
        }
        WindowEvent::CursorLeft { .. } => {
            state.cursor_pos = None;
            None
        }
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button: MouseButton::Left,
            ..
        } => {
            let cursor_pos = state.cursor_pos?;
            let grid_size = state.global_state.session.dimensions();

            cursor_cell(cursor_pos, (state.width, state.height), grid_size).map(Command::Toggle)
        }
        WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() && !event.repeat => {
            key_command(event.logical_key.as_ref())
        }
        _ => None,
    }
}

fn key_command(key: Key<&str>) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Space) => Some(Command::Step),
        Key::Named(NamedKey::ArrowUp) => Some(Command::Slower),
        Key::Named(NamedKey::ArrowDown) => Some(Command::Faster),
        Key::Character("c" | "C") => Some(Command::Clear),
        Key::Character("s" | "S") => Some(Command::Save),
        Key::Character("l" | "L") => Some(Command::Load),
        Key::Character("a" | "A") => Some(Command::ToggleAuto),
        _ => None,
    }
}

/// Maps a cursor position to the cell under it.
///
/// Positions past the right or bottom edge map to out-of-range cells, which the session rejects.
fn cursor_cell(
    cursor_pos: PhysicalPosition<f64>,
    (window_width, window_height): (u32, u32),
    (grid_width, grid_height): (usize, usize),
) -> Option<Position> {
    if cursor_pos.x < 0.0 || cursor_pos.y < 0.0 || window_width == 0 || window_height == 0 {
        return None;
    }

    let x = cursor_pos.x * grid_width as f64 / window_width as f64;
    let y = cursor_pos.y * grid_height as f64 / window_height as f64;

    Some(Position::new(x.floor() as usize, y.floor() as usize))
}

struct RendererState {
    global_state: State,
    cursor_pos: Option<PhysicalPosition<f64>>,
    width: u32,
    height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_proportionally() {
        let cell = cursor_cell(PhysicalPosition::new(449.0, 899.5), (900, 900), (10, 20));
        assert_eq!(cell, Some(Position::new(4, 19)));
    }

    #[test]
    fn cursor_outside_window() {
        assert_eq!(
            cursor_cell(PhysicalPosition::new(-1.0, 10.0), (900, 900), (10, 10)),
            None
        );
        assert_eq!(
            cursor_cell(PhysicalPosition::new(900.0, 10.0), (900, 900), (10, 10)),
            Some(Position::new(10, 0))
        );
    }

    #[test]
    fn cell_spans_tile_the_screen() {
        let spans = (0..7).map(|index| cell_span(index, 7, 100)).collect::<Vec<_>>();

        assert_eq!(spans.first().map(|span| span.0), Some(0));
        assert_eq!(spans.last().map(|span| span.1), Some(100));
        assert!(spans.windows(2).all(|pair| pair[0].1 == pair[1].0));
    }

    #[test]
    fn keys() {
        assert_eq!(key_command(Key::Named(NamedKey::Space)), Some(Command::Step));
        assert_eq!(key_command(Key::Character("S")), Some(Command::Save));
        assert_eq!(key_command(Key::Character("l")), Some(Command::Load));
        assert_eq!(key_command(Key::Character("a")), Some(Command::ToggleAuto));
        assert_eq!(key_command(Key::Named(NamedKey::ArrowDown)), Some(Command::Faster));
        assert_eq!(key_command(Key::Character("x")), None);
    }
}
