//! Launch failures and their mapping onto process exit codes.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// One terminal failure per run, named after the phase that produced it.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("embedded script is empty or missing")]
    EmptyPayload,

    #[error("creating temporary file: {0}")]
    TempFileCreate(#[source] io::Error),

    #[error("writing temporary file: {0}")]
    Write(#[source] io::Error),

    /// The lookup error is kept as the source but left out of the message;
    /// the user only needs to know what to install.
    #[error("{name} not found. Please ensure {name} is installed and in your PATH.")]
    InterpreterNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("starting {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("waiting for interpreter: {0}")]
    Wait(#[source] io::Error),

    #[error("running script: interpreter exited with {0}")]
    ChildExit(ExitStatus),
}

impl LaunchError {
    /// Exit code the launcher should terminate with for this failure.
    ///
    /// A failing child hands its own code through; everything else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::ChildExit(status) => child_exit_code(status),
            _ => 1,
        }
    }
}

fn child_exit_code(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (128 + signal).clamp(1, 255) as u8;
        }
    }
    1
}
