use clap::Parser;

/// Runs the bundled Ethereum REPL under the locally installed Node.js.
///
/// Takes no arguments; stdin, stdout and stderr are handed to the REPL as-is.
#[derive(Parser, Debug, Clone)]
#[command(name = "ethrepl", version)]
pub struct Cli {}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
