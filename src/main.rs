mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod web;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("exam_score_predictor=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
