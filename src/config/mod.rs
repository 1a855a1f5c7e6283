use std::path::PathBuf;

/// Interpreter the embedded script is written for.
pub const DEFAULT_INTERPRETER: &str = "node";
/// Temporary script files are named `<prefix><random><suffix>`.
pub const DEFAULT_PREFIX: &str = "ethrepl-";
pub const DEFAULT_SUFFIX: &str = ".js";
/// Own log output; anything chattier would land in the child's stderr.
pub const LOG_FILTER: &str = "warn";

/// Settings for one launcher. Everything is fixed at build time; nothing is
/// read from the environment or from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Executable name looked up on the search path.
    pub interpreter: String,
    pub prefix: String,
    /// Extension the interpreter uses to recognise the script type.
    pub suffix: String,
    /// Where to put the script; `None` means the host temp directory.
    pub temp_dir: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.into(),
            prefix: DEFAULT_PREFIX.into(),
            suffix: DEFAULT_SUFFIX.into(),
            temp_dir: None,
        }
    }
}
