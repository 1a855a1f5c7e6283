//! Materialize the embedded script and run it under the interpreter.

use std::{io::Write, process::ExitStatus};

use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

use crate::{
    config::LauncherConfig,
    error::LaunchError,
    process::{self, Streams},
};

pub struct Launcher<'a> {
    payload: &'a str,
    config: LauncherConfig,
}

impl<'a> Launcher<'a> {
    pub fn new(payload: &'a str, config: LauncherConfig) -> Self {
        Self { payload, config }
    }

    /// Run with the parent's streams passed straight through.
    pub async fn run(&self) -> Result<ExitStatus, LaunchError> {
        self.run_with(Streams::inherit()).await
    }

    /// Every phase fails fast. The temp script is removed on every path once
    /// it exists, because the guard is dropped on early return too.
    pub async fn run_with(&self, streams: Streams) -> Result<ExitStatus, LaunchError> {
        if self.payload.is_empty() {
            return Err(LaunchError::EmptyPayload);
        }

        // Armed before the temp script exists so Ctrl-C cannot orphan it.
        let interrupts = process::Interrupts::listen()
            .map_err(|e| warn!(error = %e, "cannot listen for interrupts"))
            .ok();

        let script = self.materialize()?;
        let interpreter = process::resolve_interpreter(&self.config.interpreter)?;
        let status = process::run_script(&interpreter, &script, streams, interrupts).await?;

        let path = script.to_path_buf();
        if let Err(e) = script.close() {
            warn!(path = %path.display(), error = %e, "failed to remove temporary script");
        }

        if status.success() {
            Ok(status)
        } else {
            Err(LaunchError::ChildExit(status))
        }
    }

    /// Write the payload to a fresh temp file and close the handle, keeping
    /// only the path guard. Some platforms refuse to let another process open
    /// a file we still hold open for writing.
    fn materialize(&self) -> Result<TempPath, LaunchError> {
        let mut builder = Builder::new();
        builder
            .prefix(self.config.prefix.as_str())
            .suffix(self.config.suffix.as_str());
        let created = match &self.config.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut file = created.map_err(LaunchError::TempFileCreate)?;

        // On failure `file` drops here and removes itself.
        write_payload(&mut file, self.payload)?;

        let path = file.into_temp_path();
        debug!(path = %path.display(), bytes = self.payload.len(), "wrote temporary script");
        Ok(path)
    }
}

/// Short writes count as failures: `write_all` reports them as `WriteZero`.
fn write_payload(out: &mut impl Write, payload: &str) -> Result<(), LaunchError> {
    out.write_all(payload.as_bytes())
        .and_then(|_| out.flush())
        .map_err(LaunchError::Write)
}
