//! Line-based console loop.

use anyhow::Result;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::command::parse_command;
use crate::game::{Flow, GameState};

/// Why a session stopped prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The side to move had no legal location.
    GameOver,
    /// The player entered a stop command.
    Stopped,
    /// The line source was exhausted or interrupted.
    InputClosed,
}

/// Main console loop.
///
/// Reads commands from a rustyline editor and prints the final grid and
/// result however the session ends.
///
/// # Arguments
/// * `size` - Grid dimension
/// * `strict` - Report rejected placements instead of ignoring them
pub fn ui_loop(size: usize, strict: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut game = GameState::new(size, strict)?;

    let end = run_session(&mut game, || match rl.readline("> ") {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    })?;
    debug!(?end, "session finished");

    println!();
    game.print_result();
    Ok(())
}

/// Drives `game` with lines from `next_line` until it ends.
///
/// The game-over check runs before every prompt, so a finished game never
/// reads input. Blank lines re-prompt and malformed or rejected commands are
/// reported without ending the session. `next_line` returns `Ok(None)` when
/// input is closed.
pub fn run_session<F>(game: &mut GameState, mut next_line: F) -> Result<SessionEnd>
where
    F: FnMut() -> Result<Option<String>>,
{
    while !game.core().is_game_over() {
        game.print();
        game.print_prompt();

        let Some(line) = next_line()? else {
            return Ok(SessionEnd::InputClosed);
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}\n");
                continue;
            }
        };
        debug!(?command, "command received");

        match game.execute(command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => return Ok(SessionEnd::Stopped),
            Err(err) => println!("{err}\n"),
        }
    }
    Ok(SessionEnd::GameOver)
}
