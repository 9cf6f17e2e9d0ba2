use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Interactive shell over a simplified view of a directory tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The directory the session starts in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_and_warn() {
        let cli = Cli::try_parse_from(["fakefs"]).expect("Failed to parse");

        assert_eq!(cli.root, PathBuf::from("."));
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn accepts_root_and_log_level() {
        let cli = Cli::try_parse_from(["fakefs", "-l", "silent", "--root", "/tmp"])
            .expect("Failed to parse");

        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert!(matches!(cli.log_level, LogLevel::Silent));
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["fakefs", "--log-level", "loud"]).is_err());
    }
}
