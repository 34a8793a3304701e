// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pxb - proximity event bridge tools

mod commands;
mod output;
mod scenario;
mod transcript;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{categories, replay};

#[derive(Parser)]
#[command(
    name = "pxb",
    version,
    about = "pxb buffers proximity events until their consumers are ready"
)]
struct Cli {
    /// Log bridge internals at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a timed scenario against a bridge
    Replay(replay::ReplayArgs),
    /// List the known event categories
    Categories(categories::CategoriesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Replay(args) => replay::handle(args).await,
        Commands::Categories(args) => categories::handle(args),
    }
}

/// Log to stderr so stdout carries only command output
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
