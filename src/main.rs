use crate::cli::Cli;
use clap::Parser;
use colored::*;
use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod matcher;
mod render;
mod scanner;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose());

    cli.run().map(|_| ExitCode::SUCCESS).unwrap_or_else(|e| {
        if !cli.quiet() {
            eprintln!("{}", format!("{:#}", e).bold().red());
        }
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
