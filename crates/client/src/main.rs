//! Diamond bot command-line entry point.
//!
//! Run with: `diamonds <command>`

use anyhow::Result;
use clap::Parser;
use diamonds_client::commands::{Decide, Explain};
use diamonds_client::logging;

/// Offline decisions for the diamond-collecting bot
#[derive(Parser)]
#[command(name = "diamonds")]
#[command(about = "Decide the next move of a diamond-collecting bot", long_about = None)]
#[command(version)]
struct Cli {
    /// Log candidate rankings and policy decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the next move for a bot on a board snapshot
    Decide(Decide),

    /// Show how the next move was reached
    Explain(Explain),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DIAMONDS_* overrides and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.command {
        Command::Decide(cmd) => cmd.execute(),
        Command::Explain(cmd) => cmd.execute(),
    }
}
