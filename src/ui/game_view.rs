use super::board_widget::{board_lines, piece_color};
use crate::config::GameMode;
use crate::game::{GameState, Status};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: Option<&str>,
    mode: GameMode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(4),  // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode, chunks[0]);
    render_board(frame, game_state, selected_column, mode, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, mode, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, mode: GameMode, area: Rect) {
    let (status, color) = match game_state.status() {
        Status::InProgress(player) => (
            format!("Current Player: {}  |  {}", player.name(), mode.name()),
            piece_color(player),
        ),
        Status::Won(player) => (
            format!("Game Over: {} wins  |  {}", player.name(), mode.name()),
            piece_color(player),
        ),
        Status::Draw => (
            format!("Game Over: draw  |  {}", mode.name()),
            Color::White,
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    mode: GameMode,
    area: Rect,
) {
    // Random play has no column to aim with.
    let selected = match mode {
        GameMode::User if !game_state.is_terminal() => Some(selected_column),
        _ => None,
    };
    let lines = board_lines(game_state.board(), selected, game_state.last_placement());

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, mode: GameMode, area: Rect) {
    let line1 = match mode {
        GameMode::User => Line::from("←/→: Move  |  Enter: Drop  |  0-6: Drop in column"),
        GameMode::Random => Line::from("Enter: Play a random move"),
    };
    let line2 = Line::from("M: Switch mode  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(game_state: &GameState, message: Option<&str>, mode: GameMode) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| render(f, game_state, 3, message, mode))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_new_game() {
        let screen = draw(&GameState::new(), None, GameMode::User);
        assert!(screen.contains("Connect Four"));
        assert!(screen.contains("Current Player: Player 1"));
        assert!(screen.contains("User input"));
        assert!(screen.contains("▲"));
    }

    #[test]
    fn test_render_finished_game() {
        let mut state = GameState::new();
        for col in [3, 0, 3, 0, 3, 0, 3] {
            state.apply_move_mut(col).unwrap();
        }
        let screen = draw(&state, Some("Player 1 wins!"), GameMode::Random);
        assert!(screen.contains("Game Over: Player 1 wins"));
        assert!(screen.contains("Player 1 wins!"));
        assert!(screen.contains("Random input"));
        assert!(!screen.contains("▲"));
    }
}
