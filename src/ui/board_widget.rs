use crate::game::{Board, Cell, Placement, PlayerId, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Display color of a player's pieces.
pub fn piece_color(player: PlayerId) -> Color {
    match player {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Yellow,
    }
}

/// Board lines, top row first, framed, with column numbers above and a
/// selector arrow below. The most recent piece is drawn reversed.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    last: Option<Placement>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {col} ");
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let span = match board.cell_at(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => {
                    let mut style = Style::default().fg(piece_color(player));
                    if last.is_some_and(|p| p.row == row && p.col == col) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_shape() {
        let lines = board_lines(&Board::new(), Some(3), None);
        assert_eq!(lines.len(), ROWS + 4);
        assert_eq!(text(&lines[0]), "    0  1  2  3  4  5  6   ");
        assert!(text(&lines[ROWS + 3]).contains('▲'));
    }

    #[test]
    fn test_bottom_row_is_drawn_last() {
        let state = GameState::new().apply_move(0).unwrap();
        let lines = board_lines(state.board(), None, state.last_placement());

        // lines[1] is the top border, lines[2..2 + ROWS] the rows top first.
        assert!(text(&lines[1 + ROWS]).starts_with("  ║ ● "));
        assert!(!text(&lines[2]).contains('●'));
        assert!(!text(&lines[ROWS + 3]).contains('▲'));
    }

    #[test]
    fn test_last_piece_is_highlighted() {
        let state = GameState::new().apply_move(4).unwrap();
        let lines = board_lines(state.board(), None, state.last_placement());
        let piece = &lines[1 + ROWS].spans[1 + 4];
        assert_eq!(piece.content, " ● ");
        assert!(piece.style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(piece.style.fg, Some(Color::Red));
    }
}
