mod app;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

#[derive(Debug, Parser)]
#[command(author, version, about = "4x4 sliding-tile puzzle in the terminal")]
struct Cli {
    /// RNG seed for a reproducible run (seeded from entropy if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Logs go to stderr; keep them quiet by default so they don't fight
    // the alternate screen. RUST_LOG=debug for move-by-move tracing.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    info!("starting session (seed: {:?})", cli.seed);
    app::run(cli.seed)
}
