use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::filesystem::{DirectoryNode, DirectoryScanError};
use crate::session::Session;
use crate::shell::{Shell, ShellError};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Self::run_with_io(app_config, stdin, stdout)
    }

    pub fn run_with_io(
        app_config: impl Into<RuntimeConfig>,
        input: impl BufRead,
        output: impl Write,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let root = Self::resolve_root(&app_config)?;
        let root_node = DirectoryNode::scan(&root).context(RootScanSnafu)?;
        debug!(
            "Scanned root {} with {} entries",
            root.best_effort_path_display(),
            root_node.children().len()
        );

        Shell::new(Session::new(root_node), input, output)
            .with_prompt(app_config.interactive)
            .run()
            .context(ShellRunSnafu)?;

        Ok(())
    }

    fn resolve_root(app_config: &RuntimeConfig) -> Result<PathBuf, ApplicationError> {
        if app_config.root.is_absolute() {
            return Ok(app_config.root.clone());
        }
        let current_dir = env::current_dir().context(CurrentDirSnafu)?;
        Ok(current_dir.join(&app_config.root))
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to obtain current dir"))]
    CurrentDirError { source: io::Error },
    #[snafu(display("Critical failure encountered while reading the starting directory"))]
    RootScanError { source: DirectoryScanError },
    #[snafu(display("Critical failure encountered while running the shell"))]
    ShellRunError { source: ShellError },
}
