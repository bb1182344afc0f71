use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::trace;

use crate::game::{validate_column_selection, GameState, COLS};

/// Picks columns uniformly at random for whoever is to move.
///
/// Candidates are drawn from every column and re-drawn until one passes
/// validation, so full columns are simply skipped.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        RandomPicker {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        RandomPicker {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A legal column for the side to move, or `None` once the game is over.
    pub fn pick(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }

        loop {
            let candidate = self.rng.random_range(0..COLS);
            match validate_column_selection(candidate, state.board()) {
                Ok(col) => return Some(col),
                Err(err) => {
                    trace!(candidate, %err, "redrawing random column");
                }
            }
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, ROWS};

    #[test]
    fn test_random_picker_selects_legal_column() {
        let mut picker = RandomPicker::new();
        let state = GameState::new();
        let legal = state.legal_columns();

        for _ in 0..100 {
            let col = picker.pick(&state).unwrap();
            assert!(legal.contains(&col), "Column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_picker_skips_full_columns() {
        let mut state = GameState::new();
        for _ in 0..ROWS {
            state.apply_move_mut(0).unwrap();
        }
        let mut picker = RandomPicker::seeded(3);
        for _ in 0..100 {
            assert_ne!(picker.pick(&state), Some(0));
        }
    }

    #[test]
    fn test_random_picker_plays_full_game() {
        let mut picker = RandomPicker::new();
        let mut state = GameState::new();

        while let Some(col) = picker.pick(&state) {
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(picker.pick(&state), None);
    }

    #[test]
    fn test_seeded_pickers_agree() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let mut state = GameState::new();

        while let Some(col) = a.pick(&state) {
            assert_eq!(b.pick(&state), Some(col));
            state.apply_move_mut(col).unwrap();
        }
    }
}
