//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Weekly work-time summary from a gtimelog file.
///
/// Reads the timelog, groups entries by ISO week and day, and prints worked
/// time against a standard workday.
#[derive(Debug, Parser)]
#[command(name = "gtl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timelog to read instead of the configured one.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Emit one JSON object per week instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from(["gtl", "-v", "--json", "--file", "/tmp/log.txt"]);
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/log.txt")));
        assert!(cli.config.is_none());
    }
}
