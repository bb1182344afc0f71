//! Line-oriented front end: prints the board as text and reads column numbers
//! one per line.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::GameMode;
use crate::error::{ConsoleError, MoveError};
use crate::game::{Board, Cell, GameState, PlayerId, Status, COLS, ROWS};
use crate::random::RandomPicker;

pub const OPEN_SPACE: &str = "⚪️";
pub const PLAYER_ONE_PIECE: &str = "🔴";
pub const PLAYER_TWO_PIECE: &str = "🟡";
const COLUMN_LEGEND: &str = "0️⃣ |1️⃣ |2️⃣ |3️⃣ |4️⃣ |5️⃣ |6️⃣ ";

pub fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => OPEN_SPACE,
        Cell::Occupied(PlayerId::One) => PLAYER_ONE_PIECE,
        Cell::Occupied(PlayerId::Two) => PLAYER_TWO_PIECE,
    }
}

/// Text rendering of a board, top row first, with a column legend underneath.
pub struct BoardText<'a>(pub &'a Board);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    f.write_str("|")?;
                }
                f.write_str(glyph(self.0.cell_at(row, col)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{COLUMN_LEGEND}")
    }
}

/// Plays one game over a reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    mode: GameMode,
    picker: RandomPicker,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, mode: GameMode, picker: RandomPicker) -> Self {
        Console {
            input,
            output,
            mode,
            picker,
        }
    }

    /// Run a game to completion and return the final state.
    pub fn play(&mut self) -> Result<GameState, ConsoleError> {
        let mut state = GameState::new();
        self.print_board(&state)?;

        while let Status::InProgress(player) = state.status() {
            match self.mode {
                GameMode::User => self.user_turn(&mut state, player)?,
                GameMode::Random => self.random_turn(&mut state, player)?,
            }
            self.print_board(&state)?;
        }

        match state.status() {
            Status::Won(player) => writeln!(self.output, "Game Over!\n{} wins!", player.name())?,
            Status::Draw => writeln!(self.output, "Game Over! The board is full!")?,
            Status::InProgress(_) => unreachable!("loop exits only on a terminal status"),
        }
        self.output.flush()?;

        Ok(state)
    }

    /// Prompt until the player enters a column the game accepts.
    fn user_turn(&mut self, state: &mut GameState, player: PlayerId) -> Result<(), ConsoleError> {
        let mut prompt = format!("{}, make your move (0-6): ", player.name());
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            let input = line.trim();
            match input.parse::<usize>() {
                Ok(col) => match state.apply_move_mut(col) {
                    Ok(_) => return Ok(()),
                    Err(MoveError::Invalid(err)) => {
                        debug!(player = player.number(), col, %err, "re-prompting");
                    }
                    Err(err @ MoveError::GameOver) => return Err(err.into()),
                },
                Err(_) => {
                    debug!(player = player.number(), input, "not a column number");
                }
            }

            prompt = format!("{}, make a VALID move (0-6): ", player.name());
        }
    }

    fn random_turn(&mut self, state: &mut GameState, player: PlayerId) -> Result<(), ConsoleError> {
        let col = self.picker.pick(state).ok_or(MoveError::GameOver)?;
        state.apply_move_mut(col)?;
        writeln!(self.output, "{} drops into column {col}", player.name())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }

    fn print_board(&mut self, state: &GameState) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        write!(self.output, "{}", BoardText(state.board()))?;
        Ok(())
    }
}
