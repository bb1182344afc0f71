use crate::config::GameMode;
use crate::error::MoveError;
use crate::game::{GameState, Status, COLS};
use crate::random::RandomPicker;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

const MIDDLE_COL: usize = COLS / 2;

pub struct App {
    game_state: GameState,
    mode: GameMode,
    picker: RandomPicker,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(mode: GameMode, picker: RandomPicker) -> Self {
        App {
            game_state: GameState::new(),
            mode,
            picker,
            selected_column: MIDDLE_COL,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        info!(mode = ?self.mode, "starting terminal UI");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.mode {
                GameMode::User => self.drop_piece(self.selected_column),
                GameMode::Random => self.play_random(),
            },
            KeyCode::Char(c @ '0'..='9') if self.mode == GameMode::User => {
                let col = c as usize - '0' as usize;
                if col < COLS {
                    self.selected_column = col;
                }
                self.drop_piece(col);
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggled();
                debug!(mode = ?self.mode, "mode switched");
                self.message = Some(format!("Switched to {}", self.mode.name()));
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new();
                self.selected_column = MIDDLE_COL;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn play_random(&mut self) {
        match self.picker.pick(&self.game_state) {
            Some(col) => self.drop_piece(col),
            None => self.message = Some("Game over! Press 'r' to restart.".to_string()),
        }
    }

    /// Drop the side to move's piece in `col`
    fn drop_piece(&mut self, col: usize) {
        match self.game_state.apply_move_mut(col) {
            Ok(Status::Won(player)) => {
                self.message = Some(format!("{} wins!", player.name()));
            }
            Ok(Status::Draw) => {
                self.message = Some("It's a draw!".to_string());
            }
            Ok(Status::InProgress(_)) => {}
            Err(MoveError::Invalid(err)) => {
                self.message = Some(format!("Invalid move: {err}"));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.message(),
            self.mode,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, PlayerId};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn user_app() -> App {
        App::new(GameMode::User, RandomPicker::seeded(5))
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = user_app();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = user_app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().cell_at(0, 2), Cell::Occupied(PlayerId::One));
        assert_eq!(app.game_state().status(), Status::InProgress(PlayerId::Two));
    }

    #[test]
    fn test_digit_keys_drop_directly() {
        let mut app = user_app();
        for c in ['3', '0', '3', '0', '3', '0', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game_state().status(), Status::Won(PlayerId::One));
        assert_eq!(app.message(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_invalid_moves_are_reported() {
        let mut app = user_app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(
            app.message(),
            Some("Invalid move: column 9 is out of range (expected 0-6)")
        );
        assert_eq!(app.game_state().move_count(), 0);

        for _ in 0..6 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), Some("Invalid move: column 1 is full"));
        assert_eq!(app.game_state().move_count(), 6);
    }

    #[test]
    fn test_random_mode_plays_on_enter() {
        let mut app = App::new(GameMode::Random, RandomPicker::seeded(9));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().move_count(), 1);

        // Digits are ignored while the picker is in charge.
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.game_state().move_count(), 1);

        while !app.game_state().is_terminal() {
            press(&mut app, KeyCode::Char(' '));
        }
        assert!(app.message().is_some());
    }

    #[test]
    fn test_mode_switch_and_restart() {
        let mut app = user_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.mode(), GameMode::Random);
        assert_eq!(app.message(), Some("Switched to Random input"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(*app.game_state(), GameState::new());
        assert_eq!(app.selected_column(), MIDDLE_COL);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = user_app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
