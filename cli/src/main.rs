//! # xkcd Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the xkcd CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and running the comic handler
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! xkcd --help
//!
//! # Fetch comic 353 with debug logging, without opening the viewer
//! xkcd -vv -O 353
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (`--config`, `XKCD_CONFIG`, user config, defaults)
//! 4. Run the comic handler and map any error to exit status 1
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use xkcd::{commands, core::config};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "xkcd",
    about = "Fetch an XKCD comic, open its image and print its transcript",
    long_about = "Downloads the metadata of the numbered XKCD comic, opens the comic image\n\
                  in an image viewer and prints the transcript. Both steps are on by\n\
                  default and can be turned off with -O/--no-open and -P/--no-print.",
    version
)]
struct Cli {
    #[command(flatten)]
    comic: commands::comic::ComicArgs,

    /// Configuration file to use instead of the user config
    #[arg(long, value_name = "PATH", env = "XKCD_CONFIG")]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = config::load_config(cli.config.as_deref())
        .and_then(|cfg| commands::comic::handle_comic(cli.comic, &cfg));

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
