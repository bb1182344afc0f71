//! Core Connect Four game logic: board, players, move validation, win
//! detection and the turn state machine.

mod board;
mod player;
mod state;
mod validator;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::PlayerId;
pub use state::{GameState, Placement, Status};
pub use validator::validate_column_selection;
pub use win::Axis;
