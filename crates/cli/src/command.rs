//! Parsing of console commands.

use reversi_rules::{Coord, CoordError};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a piece for the side to move.
    Place(Coord),
    /// Save the current grid and turn.
    Checkpoint,
    /// Restore the most recent checkpoint.
    Undo,
    /// End the game and print the result.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("missing location: use 'p <row> <column>', e.g. 'p d 3'")]
    MissingLocation,
    #[error(transparent)]
    Location(#[from] CoordError),
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line. The location may follow `p` without
/// a space (`pd3`). Anything that is not a placement, checkpoint or undo
/// request stops the game.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let Some((keyword, rest)) = split_keyword(line) else {
        return Ok(None);
    };

    let command = match keyword {
        "p" | "place" => {
            if rest.is_empty() {
                return Err(CommandError::MissingLocation);
            }
            Command::Place(rest.parse()?)
        }
        "c" | "checkpoint" => Command::Checkpoint,
        "u" | "undo" => Command::Undo,
        other => match other.strip_prefix('p') {
            Some(glued) if !glued.is_empty() => {
                let location = if rest.is_empty() {
                    glued.to_string()
                } else {
                    format!("{glued} {rest}")
                };
                Command::Place(location.parse()?)
            }
            _ => Command::Stop,
        },
    };
    Ok(Some(command))
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => Some((keyword, rest.trim())),
        None => Some((line, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let d3 = Coord::new(3, 2);
        assert_eq!(parse_command("p d 3"), Ok(Some(Command::Place(d3))));
        assert_eq!(parse_command("p d3"), Ok(Some(Command::Place(d3))));
        assert_eq!(parse_command("  place D3  "), Ok(Some(Command::Place(d3))));
        assert_eq!(
            parse_command("p a 12"),
            Ok(Some(Command::Place(Coord::new(0, 11))))
        );
    }

    #[test]
    fn test_parse_place_without_space() {
        let d3 = Coord::new(3, 2);
        assert_eq!(parse_command("pd3"), Ok(Some(Command::Place(d3))));
        assert_eq!(parse_command("pD3"), Ok(Some(Command::Place(d3))));
        assert_eq!(parse_command("pd 3"), Ok(Some(Command::Place(d3))));
        assert_eq!(
            parse_command("pd"),
            Err(CommandError::Location(CoordError::InvalidFormat))
        );
        assert!(matches!(
            parse_command("pdx"),
            Err(CommandError::Location(CoordError::InvalidColumn(_)))
        ));
    }

    #[test]
    fn test_parse_place_errors() {
        assert_eq!(parse_command("p"), Err(CommandError::MissingLocation));
        assert_eq!(
            parse_command("p 3 d"),
            Err(CommandError::Location(CoordError::InvalidRow('3')))
        );
        assert!(matches!(
            parse_command("p d zero"),
            Err(CommandError::Location(CoordError::InvalidColumn(_)))
        ));
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_command("c"), Ok(Some(Command::Checkpoint)));
        assert_eq!(parse_command("checkpoint"), Ok(Some(Command::Checkpoint)));
        assert_eq!(parse_command("u"), Ok(Some(Command::Undo)));
        assert_eq!(parse_command("undo"), Ok(Some(Command::Undo)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Stop)));
        assert_eq!(parse_command("stop"), Ok(Some(Command::Stop)));
        assert_eq!(parse_command("whatever"), Ok(Some(Command::Stop)));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
    }
}
