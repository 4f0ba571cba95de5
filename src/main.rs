//! CLI entry point for the tower coverage simulation

use clap::Parser;
use towergrid::io::cli::{Cli, SimulationRunner};
use towergrid::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> towergrid::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = SimulationRunner::new(cli);
    runner.run()
}
