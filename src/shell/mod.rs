//! Line-based front end driving a [`Session`](crate::session::Session).

mod command;
mod shell;

pub use command::Command;
pub use shell::{Shell, ShellError};
