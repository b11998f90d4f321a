mod command;
mod game;
mod ui;

use clap::Parser;
use reversi_rules::RulesError;
use reversi_rules::coord::MAX_ROWS;
use reversi_rules::grid::{DEFAULT_DIMENSION, is_supported_dimension};
use tracing_subscriber::EnvFilter;

/// Play Reversi on a square grid in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid size (even, 2 to 26)
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION, value_parser = parse_size)]
    size: usize,

    /// Report rejected placements instead of silently ignoring them
    #[arg(long)]
    strict: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size = s.parse::<usize>().map_err(|e| e.to_string())?;
    if !is_supported_dimension(size) {
        return Err(RulesError::InvalidDimension(size).to_string());
    }
    // Rows are entered as a single letter.
    if size > MAX_ROWS {
        return Err(format!("grid size {size} has more rows than letters a-z"));
    }
    Ok(size)
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level);
    ui::ui_loop(args.size, args.strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("8"), Ok(8));
        assert_eq!(parse_size("2"), Ok(2));
        assert_eq!(parse_size("26"), Ok(26));
        assert!(parse_size("7").is_err());
        assert!(parse_size("28").is_err());
        assert!(parse_size("0").is_err());
        assert!(parse_size("eight").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["reversi"]).unwrap();
        assert_eq!(cli.size, DEFAULT_DIMENSION);
        assert!(!cli.strict);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["reversi", "--size", "4", "--strict"]).unwrap();
        assert_eq!(cli.size, 4);
        assert!(cli.strict);
        assert!(Cli::try_parse_from(["reversi", "-s", "5"]).is_err());
    }
}
