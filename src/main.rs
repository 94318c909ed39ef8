//! CLI entry point for the Wang tile wall solver

use clap::Parser;
use tilewall::io::cli::{Cli, ProblemRunner};

fn main() -> tilewall::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut runner = ProblemRunner::new(cli);
    runner.process()?;
    Ok(())
}
