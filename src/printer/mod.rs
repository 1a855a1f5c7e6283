//! Diagnostic printer for the launcher's own messages (owo-colors).

use std::io;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub struct DiagnosticPrinter {
    pub color: bool,
}

impl DiagnosticPrinter {
    /// Colors only when stderr is a terminal.
    pub fn stderr() -> Self {
        Self { color: io::stderr().is_terminal() }
    }

    pub fn render(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }

    pub fn print(&self, message: &str) {
        eprintln!("{}", self.render(message));
    }
}
