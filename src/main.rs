mod cli;
mod config;
mod error;
mod launcher;
mod printer;
mod process;

use std::process::ExitCode;

use anyhow::{Context, Result};
use config::LauncherConfig;
use error::LaunchError;
use launcher::Launcher;
use printer::DiagnosticPrinter;
use tracing_subscriber::EnvFilter;

/// The bundled REPL. The packaging step overwrites this file before release.
const EMBEDDED_SCRIPT: &str = include_str!("../assets/ethrepl.js");

fn main() -> ExitCode {
    cli::Cli::parse();
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let printer = DiagnosticPrinter::stderr();
            match err.downcast_ref::<LaunchError>() {
                // The typed message already carries the system error text.
                Some(launch) => {
                    printer.print(&launch.to_string());
                    ExitCode::from(launch.exit_code())
                }
                None => {
                    printer.print(&format!("{:#}", err));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;

    let launcher = Launcher::new(EMBEDDED_SCRIPT, LauncherConfig::default());
    runtime.block_on(launcher.run())?;
    Ok(())
}

// Fixed filter: the launcher reads no environment beyond the search path.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::LOG_FILTER))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
