//! Game session for the console.
//!
//! This module provides the `GameState` struct which wraps the core game
//! state, applies parsed commands to it and renders the grid.

use colored::Colorize;
use reversi_rules::{Cell, Color, Outcome, RulesError, Verdict, game_state};
use tracing::info;

use crate::command::Command;

/// Whether the game loop should keep prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A game in progress together with the console's move policy.
pub struct GameState {
    core: game_state::GameState,
    /// Report rejected placements instead of ignoring them.
    strict: bool,
}

impl GameState {
    /// Creates a new game on a `size` x `size` grid.
    pub fn new(size: usize, strict: bool) -> Result<Self, RulesError> {
        Ok(Self {
            core: game_state::GameState::new(size)?,
            strict,
        })
    }

    pub fn core(&self) -> &game_state::GameState {
        &self.core
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// In strict mode, the reason a placement was rejected. Otherwise
    /// rejected placements are silently ignored.
    pub fn execute(&mut self, command: Command) -> Result<Flow, RulesError> {
        match command {
            Command::Place(coord) => {
                if self.strict {
                    self.core.try_apply_move(coord)?;
                } else {
                    self.core.apply_move(coord);
                }
            }
            Command::Checkpoint => self.core.save_checkpoint(),
            Command::Undo => {
                if !self.core.undo() {
                    info!("no checkpoint to restore");
                }
            }
            Command::Stop => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Returns the grid as plain text: two header lines of column digits
    /// (tens, then units) followed by one `a:`-prefixed line per row.
    pub fn get_board_string(&self) -> String {
        let grid = self.core.grid();
        let n = grid.dimension();
        let mut result = String::new();

        result.push_str("  ");
        for i in 1..=n {
            if i < 10 {
                result.push(' ');
            } else {
                result.push_str(&(i / 10).to_string());
            }
        }
        result.push('\n');

        result.push_str("  ");
        for i in 1..=n {
            result.push_str(&(i % 10).to_string());
        }
        result.push('\n');

        for (y, row) in grid.rows().enumerate() {
            result.push((b'a' + y as u8) as char);
            result.push(':');
            for &cell in row {
                result.push(cell_symbol(cell));
            }
            result.push('\n');
        }
        result
    }

    /// Prints a colored representation of the grid to the terminal.
    pub fn print(&self) {
        let board = self.get_board_string();
        for header in board.lines().take(2) {
            println!("{}", header.dimmed());
        }

        for (y, row) in self.core.grid().rows().enumerate() {
            let label = format!("{}:", (b'a' + y as u8) as char);
            print!("{}", label.bold());
            for &cell in row {
                let symbol = cell_symbol(cell).to_string();
                match cell {
                    Cell::Black => print!("{}", symbol.bright_green()),
                    Cell::White => print!("{}", symbol.bright_yellow()),
                    Cell::Empty => print!("{}", symbol.dimmed()),
                }
            }
            println!();
        }
    }

    /// Prints the prompt for the side to move.
    pub fn print_prompt(&self) {
        let side = match self.core.turn() {
            Color::Black => "B".bright_green(),
            Color::White => "W".bright_yellow(),
        };
        println!("{side} - Enter 'p r c', 'c', 'u' or 'q':");
    }

    /// Prints the final grid, the verdict and the piece counts.
    pub fn print_result(&self) {
        self.print();
        let outcome = self.core.outcome();
        let verdict = match outcome.verdict {
            Verdict::BlackWins => outcome.verdict.to_string().bright_green(),
            Verdict::WhiteWins => outcome.verdict.to_string().bright_yellow(),
            Verdict::Tie => outcome.verdict.to_string().bright_cyan(),
        };
        println!("{verdict}");
        println!("{}", score_line(&outcome));
    }
}

fn cell_symbol(cell: Cell) -> char {
    match cell.color() {
        Some(color) => color.to_char(),
        None => '-',
    }
}

/// Formats the piece counts as `W=<white>/B=<black>`.
pub fn score_line(outcome: &Outcome) -> String {
    format!("W={}/B={}", outcome.white, outcome.black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_rules::Coord;

    #[test]
    fn test_board_string_4x4() {
        let game = GameState::new(4, false).unwrap();
        assert_eq!(
            game.get_board_string(),
            "      \n  1234\na:----\nb:-BW-\nc:-WB-\nd:----\n"
        );
    }

    #[test]
    fn test_board_string_header_past_nine() {
        let game = GameState::new(12, false).unwrap();
        let board = game.get_board_string();
        let mut lines = board.lines();
        assert_eq!(lines.next(), Some("           111"));
        assert_eq!(lines.next(), Some("  123456789012"));
        assert_eq!(board.lines().count(), 14);
    }

    #[test]
    fn test_execute_permissive() {
        let mut game = GameState::new(4, false).unwrap();
        assert_eq!(game.execute(Command::Place(Coord::new(0, 0))), Ok(Flow::Continue));
        assert_eq!(game.core().turn(), Color::Black);

        assert_eq!(game.execute(Command::Place(Coord::new(0, 2))), Ok(Flow::Continue));
        assert_eq!(game.core().turn(), Color::White);
    }

    #[test]
    fn test_execute_strict_reports_rejection() {
        let mut game = GameState::new(4, true).unwrap();
        assert_eq!(
            game.execute(Command::Place(Coord::new(0, 0))),
            Err(RulesError::IllegalMove(Coord::new(0, 0)))
        );
        assert_eq!(game.core().turn(), Color::Black);
    }

    #[test]
    fn test_execute_checkpoint_and_undo() {
        let mut game = GameState::new(4, false).unwrap();
        let before = game.get_board_string();

        game.execute(Command::Checkpoint).unwrap();
        game.execute(Command::Place(Coord::new(0, 2))).unwrap();
        assert_ne!(game.get_board_string(), before);

        game.execute(Command::Undo).unwrap();
        assert_eq!(game.get_board_string(), before);
        assert_eq!(game.core().turn(), Color::Black);

        // Nothing left to restore.
        assert_eq!(game.execute(Command::Undo), Ok(Flow::Continue));
        assert_eq!(game.get_board_string(), before);
    }

    #[test]
    fn test_execute_stop() {
        let mut game = GameState::new(8, false).unwrap();
        assert_eq!(game.execute(Command::Stop), Ok(Flow::Stop));
    }

    #[test]
    fn test_score_line() {
        let outcome = Outcome::from_counts(5, 3);
        assert_eq!(score_line(&outcome), "W=3/B=5");
    }
}
