use std::io::{self, BufRead, Write};

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::session::{Session, SizeGenerator};
use crate::shell::Command;

pub const PROMPT: &str = "Enter a command ('dir', 'cd name', 'sortsize', 'sortname', 'mkdir name', 'mkfile name', 'exit'): ";

const INVALID_DIRECTORY: &str = "Invalid directory or not a directory.";
const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// Reads commands line by line and writes their results until `exit` or
/// the end of input.
pub struct Shell<G: SizeGenerator, R, W> {
    session: Session<G>,
    input: R,
    output: W,
    prompt: bool,
}

impl<G, R, W> Shell<G, R, W>
where
    G: SizeGenerator,
    R: BufRead,
    W: Write,
{
    pub fn new(session: Session<G>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            prompt: false,
        }
    }

    /// Whether to print [`PROMPT`] before reading each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session<G> {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut buffer = Vec::new();

        loop {
            if self.prompt {
                write!(self.output, "{}", PROMPT.bold()).context(WriteSnafu)?;
                self.output.flush().context(WriteSnafu)?;
            }

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer).context(ReadSnafu)? == 0 {
                info!("Reached end of input, leaving");
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and the line parses as invalid
            let line = String::from_utf8_lossy(&buffer);
            let command = Command::parse(&line);
            debug!("Parsed command: {:?}", command);

            if !self.execute(command)? {
                info!("Exit requested");
                return Ok(());
            }
        }
    }

    /// Runs one command. Returns false once the loop should stop.
    fn execute(&mut self, command: Command) -> Result<bool, ShellError> {
        match command {
            Command::Dir => {
                let lines = self.session.list();
                self.write_lines(&lines)?;
            }
            Command::Cd(segment) => {
                if !self.session.change_directory(&segment) {
                    self.write_error(INVALID_DIRECTORY)?;
                }
            }
            Command::SortSize => {
                let lines = self.session.sort_by_size();
                self.write_lines(&lines)?;
            }
            Command::SortName => {
                let lines = self.session.sort_by_name();
                self.write_lines(&lines)?;
            }
            Command::Mkdir(name) => {
                let status = self.session.make_directory(&name);
                self.write_lines(&[status])?;
            }
            Command::Mkfile(name) => {
                let status = self.session.make_file(&name);
                self.write_lines(&[status])?;
            }
            Command::Exit => return Ok(false),
            Command::Invalid(line) => {
                debug!("Rejected input line {:?}", line);
                self.write_error(INVALID_COMMAND)?;
            }
        }

        Ok(true)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), ShellError> {
        for line in lines {
            writeln!(self.output, "{line}").context(WriteSnafu)?;
        }
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{}", message.red()).context(WriteSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ShellError {
    #[snafu(display("Failed to read a command"))]
    ReadError { source: io::Error },
    #[snafu(display("Failed to write command output"))]
    WriteError { source: io::Error },
}
