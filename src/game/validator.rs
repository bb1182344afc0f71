use super::board::Board;
use crate::error::InvalidMove;

/// Accept `col` if a piece can be dropped there, otherwise say why not.
///
/// Never touches the board, so callers may retry with fresh candidates as
/// often as they like.
pub fn validate_column_selection(col: usize, board: &Board) -> Result<usize, InvalidMove> {
    if board.is_column_full(col)? {
        return Err(InvalidMove::ColumnFull(col));
    }
    Ok(col)
}
