// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tubetrack - a YouTube channel growth tracker.
//!
//! This is the binary entry point for the tracker server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Tubetrack - a YouTube channel growth tracker.
#[derive(Parser, Debug)]
#[command(name = "tubetrack", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the tracker HTTP server.
    Serve,
    /// Print the effective configuration and exit.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match tubetrack_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            tubetrack_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            // api_key is omitted from this dump on purpose.
            println!("server.host = {}", config.server.host);
            println!("server.port = {}", config.server.port);
            println!("server.log_level = {}", config.server.log_level);
            println!("youtube.api_key set = {}", config.youtube.api_key.is_some());
            println!("storage.database_path = {}", config.storage.database_path);
            println!("storage.wal_mode = {}", config.storage.wal_mode);
            println!("tracker.utc_offset_hours = {}", config.tracker.utc_offset_hours);
        }
        None => {
            println!("tubetrack: use --help for available commands");
        }
    }
}
