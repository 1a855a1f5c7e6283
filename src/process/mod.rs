//! Interpreter lookup and child process management.

use std::{
    io,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::error::LaunchError;

/// Standard stream bindings handed to the child.
pub struct Streams {
    pub stdin: Stdio,
    pub stdout: Stdio,
    pub stderr: Stdio,
}

impl Streams {
    /// Child shares the parent's stdin/stdout/stderr directly.
    pub fn inherit() -> Self {
        Self {
            stdin: Stdio::inherit(),
            stdout: Stdio::inherit(),
            stderr: Stdio::inherit(),
        }
    }
}

/// Ctrl-C listener. Registration happens in `listen`, not on first poll, so an
/// interrupt between creating the temp script and waiting on the child is
/// caught instead of killing the launcher mid-run.
pub struct Interrupts {
    #[cfg(unix)]
    inner: tokio::signal::unix::Signal,
    #[cfg(windows)]
    inner: tokio::signal::windows::CtrlC,
}

impl Interrupts {
    /// Must be called from inside the runtime.
    pub fn listen() -> io::Result<Self> {
        #[cfg(unix)]
        let inner = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
        #[cfg(windows)]
        let inner = tokio::signal::windows::ctrl_c()?;
        Ok(Self { inner })
    }

    /// `None` once the listener can no longer deliver interrupts.
    pub async fn recv(&mut self) -> Option<()> {
        self.inner.recv().await
    }
}

/// Find `name` on the executable search path.
pub fn resolve_interpreter(name: &str) -> Result<PathBuf, LaunchError> {
    let path = which::which(name).map_err(|source| LaunchError::InterpreterNotFound {
        name: name.to_string(),
        source,
    })?;
    debug!(interpreter = %path.display(), "resolved interpreter");
    Ok(path)
}

/// Run `interpreter script` with the given streams and block until it exits.
pub async fn run_script(
    interpreter: &Path,
    script: &Path,
    streams: Streams,
    interrupts: Option<Interrupts>,
) -> Result<ExitStatus, LaunchError> {
    let mut cmd = Command::new(interpreter);
    cmd.arg(script)
        .stdin(streams.stdin)
        .stdout(streams.stdout)
        .stderr(streams.stderr);

    let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
        path: interpreter.to_path_buf(),
        source,
    })?;
    debug!(pid = ?child.id(), "interpreter started");

    let status = wait_through_interrupts(child, interrupts)
        .await
        .map_err(LaunchError::Wait)?;
    debug!(%status, "interpreter exited");
    Ok(status)
}

/// Ctrl-C reaches the child through the terminal's process group, so the
/// parent keeps waiting instead of dying and skipping its cleanup.
async fn wait_through_interrupts(
    mut child: Child,
    interrupts: Option<Interrupts>,
) -> io::Result<ExitStatus> {
    let Some(mut interrupts) = interrupts else {
        return child.wait().await;
    };
    loop {
        tokio::select! {
            status = child.wait() => return status,
            received = interrupts.recv() => {
                if received.is_none() {
                    warn!("interrupt listener closed");
                    return child.wait().await;
                }
                debug!("interrupt received, waiting for interpreter");
            }
        }
    }
}
