use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    /// Print the prompt before each command
    pub interactive: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            interactive: io::stdin().is_terminal(),
        }
    }
}
