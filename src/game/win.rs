use super::board::{Board, Cell, COLS, ROWS};
use super::player::PlayerId;

/// Distance between the two ends of a four-cell run.
const WIN_SPAN: isize = 3;

/// A line direction through the board, as a (row, col) step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    DiagonalUp,
    DiagonalDown,
}

impl Axis {
    /// All axes, in the order they are checked.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// Step taken when walking in the positive direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::DiagonalUp => (1, 1),
            Axis::DiagonalDown => (-1, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
            Axis::DiagonalUp => "diagonal-up",
            Axis::DiagonalDown => "diagonal-down",
        }
    }
}

/// Check if `player`'s piece just placed at `(row, col)` completes four in a row.
pub fn evaluate(board: &Board, row: usize, col: usize, player: PlayerId) -> bool {
    winning_axis(board, row, col, player).is_some()
}

/// First axis along which the piece at `(row, col)` is part of a run of four.
///
/// Only lines through `(row, col)` are examined, so runs elsewhere on the
/// board never count.
pub fn winning_axis(board: &Board, row: usize, col: usize, player: PlayerId) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| span(board, row, col, player, axis) >= WIN_SPAN)
}

/// Span of `player`'s run through `(row, col)` along `axis`.
///
/// The negative walk runs to the end of the run; the positive walk stops as
/// soon as the span reaches [`WIN_SPAN`].
fn span(board: &Board, row: usize, col: usize, player: PlayerId, axis: Axis) -> isize {
    let (dr, dc) = axis.delta();
    let owned = |step: isize| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && board.cell_at(r as usize, c as usize) == Cell::Occupied(player)
    };

    let mut start = 0;
    while owned(start - 1) {
        start -= 1;
    }

    let mut end = 0;
    while end - start < WIN_SPAN && owned(end + 1) {
        end += 1;
    }

    end - start
}
