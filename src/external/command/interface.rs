use std::path::PathBuf;
use thiserror::Error;

/// Exit code with which brightnessctl signals that no device matched the
/// given class and selector. The one recoverable failure.
pub const NO_DEVICE_EXIT_CODE: i32 = 1;

/// An error occurring while running an external command.
///
/// The exit code is carried explicitly so that callers can distinguish the
/// recoverable [NO_DEVICE_EXIT_CODE] from every other failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("couldn't spawn {command}: {message}")]
    Spawn { command: String, message: String },

    #[error("{command} exited with code {code}: {message}")]
    Failed {
        command: String,
        code: i32,
        message: String,
    },
}

impl CommandError {
    /// The exit code of the failed command, if it ran at all.
    pub fn code(&self) -> Option<i32> {
        match self {
            CommandError::Spawn { .. } => None,
            CommandError::Failed { code, .. } => Some(*code),
        }
    }
}

/// A trait allowing to run external commands synchronously.
///
/// Implementors block the calling thread for the duration of the command.
/// There is no timeout; a hanging command hangs the caller.
pub trait CommandRunner {
    /// Returns the full path to `program` if it can be found on the
    /// execution path.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Runs the command, waits for it to exit and returns its combined
    /// standard output and standard error. A non-zero exit becomes a
    /// [CommandError::Failed] carrying the exit code.
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;

    /// Starts the command for its side effect, without waiting for it to
    /// exit or inspecting its result.
    fn dispatch(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
}
