use tracing::{debug, info};

use super::board::{Board, Cell, COLS, ROWS};
use super::player::PlayerId;
use super::validator::validate_column_selection;
use super::win;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress(PlayerId),
    Won(PlayerId),
    Draw,
}

impl Status {
    /// `Won` and `Draw` accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

/// Where the most recent piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_count: usize,
    status: Status,
    last_placement: Option<Placement>,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            move_count: 0,
            status: Status::InProgress(PlayerId::One), // One starts
            last_placement: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.cell_at(row, col)
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.status {
            Status::InProgress(player) => Some(player),
            Status::Won(_) | Status::Draw => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| validate_column_selection(col, &self.board).is_ok())
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, col: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(col)?;
        Ok(next)
    }

    /// Drop the side to move's piece into `col` and advance the game.
    ///
    /// A rejected move leaves the state untouched.
    pub fn apply_move_mut(&mut self, col: usize) -> Result<Status, MoveError> {
        let Status::InProgress(player) = self.status else {
            debug!(col, status = ?self.status, "move after game over");
            return Err(MoveError::GameOver);
        };

        let col = validate_column_selection(col, &self.board).map_err(|err| {
            debug!(col, player = player.number(), %err, "move rejected");
            err
        })?;

        let Some(row) = self.board.lowest_open_row(col) else {
            unreachable!("column {col} passed validation but has no open row");
        };
        self.board.place(row, col, player);
        self.move_count += 1;
        self.last_placement = Some(Placement { row, col, player });
        debug!(player = player.number(), row, col, moves = self.move_count, "piece placed");

        self.status = if let Some(axis) = win::winning_axis(&self.board, row, col, player) {
            info!(player = player.number(), axis = axis.name(), moves = self.move_count, "game won");
            Status::Won(player)
        } else if self.move_count == ROWS * COLS {
            info!(moves = self.move_count, "game drawn");
            Status::Draw
        } else {
            Status::InProgress(player.other())
        };

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
