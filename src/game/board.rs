use super::player::PlayerId;
use crate::error::InvalidMove;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// The 6x7 grid. Row 0 is the bottom row.
///
/// Within every column the occupied cells form a contiguous block starting at
/// row 0. Only [`Board::place`] writes cells, and it refuses any placement
/// that is not the lowest open row of its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if `(row, col)` lies outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, InvalidMove> {
        if col >= COLS {
            return Err(InvalidMove::OutOfRange(col));
        }
        Ok(self.cells[ROWS - 1][col] != Cell::Empty)
    }

    /// First empty row of `col` scanning bottom-up, `None` if the column is
    /// full. `col` must already be validated.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Number of pieces stacked in `col`.
    pub fn column_height(&self, col: usize) -> usize {
        self.lowest_open_row(col).unwrap_or(ROWS)
    }

    /// Put `player`'s piece at `(row, col)`.
    ///
    /// `row` must be what [`Board::lowest_open_row`] returned for `col` with
    /// no mutation in between. Anything else would leave a gap or overwrite a
    /// piece, so it panics.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        assert_eq!(
            self.lowest_open_row(col),
            Some(row),
            "placement at ({row}, {col}) is not the lowest open row of column {col}"
        );
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Total number of pieces on the board
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|&cell| cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
