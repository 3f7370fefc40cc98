//! Serializable game summary for host-side persistence.

use picrolace_core::SolutionError;

use crate::{Game, InitOptions, PuzzleInput};

/// A serializable summary of a game, sufficient to restore it later.
///
/// The engine performs no I/O itself; hosts serialize this however they
/// persist sessions and feed it back through [`Game::restore`]. Undo/redo
/// history is session-local and deliberately not captured.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSnapshot {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Ground-truth solution, `'0'`/`'1'`, row-major.
    pub solution: String,
    /// The player's marks, `'0'`/`'1'`/`'x'`, row-major.
    pub user_solution: String,
    /// Whether the game was in authoring mode.
    pub is_editing: bool,
}

impl Game {
    /// Captures the restorable parts of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.width(),
            height: self.height(),
            solution: self.solution_string(),
            user_solution: self.user_solution().to_owned(),
            is_editing: self.is_editing(),
        }
    }

    /// Rebuilds a game from a snapshot, restoring the player's marks.
    ///
    /// # Errors
    ///
    /// Returns a [`SolutionError`] when the snapshot's dimensions and
    /// solution string disagree.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, SolutionError> {
        let input = PuzzleInput::new(snapshot.width, snapshot.height, &snapshot.solution);
        let options = InitOptions::default()
            .is_editing(snapshot.is_editing)
            .user_solution(&snapshot.user_solution);
        Self::new(&input, &options)
    }
}

#[cfg(test)]
mod tests {
    use picrolace_core::Position;

    use crate::{Game, GameSnapshot, InitOptions, PuzzleInput};

    fn solved_corner_game() -> Game {
        let input = PuzzleInput::new(2, 2, "1000");
        let mut game = Game::new(&input, &InitOptions::default()).expect("valid input");
        game.start_dragging(Position::new(0, 0));
        game.stop_dragging();
        game
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let snapshot = solved_corner_game().snapshot();
        let json = serde_json::to_string(&snapshot).expect("serializable");
        let decoded: GameSnapshot = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn restore_recovers_user_marks() {
        let game = solved_corner_game();
        let restored = Game::restore(&game.snapshot()).expect("valid snapshot");

        assert_eq!(restored.user_solution(), game.user_solution());
        assert_eq!(restored.user_solution(), "1000");
        let cell = restored.cell(Position::new(0, 0)).expect("in bounds");
        assert!(cell.is_valid);
    }
}
