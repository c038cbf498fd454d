//! Game of Life on a bounded grid: the board, the generation step, an editable session with one
//! snapshot slot, and a timer for stepping automatically.

pub mod autoadvance;
pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod session;
pub mod transition;

pub use autoadvance::{AutoAdvance, AutoAdvanceConfig};
pub use board::{CellState, Grid};
pub use error::GameError;
pub use pos::Position;
pub use rule::Rule;
pub use session::{Session, SessionEvent, Snapshot};
