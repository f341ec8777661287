//! Datemark CLI - burn EXIF capture dates into photos as visible watermarks.
//!
//! # Usage
//!
//! ```bash
//! # Watermark every photo in a directory (outputs to ./photos_watermark/)
//! datemark process ./photos/
//!
//! # Single image, custom styling
//! datemark process image.jpg --size 32 --color "#ffcc00" --placement top-left
//!
//! # View configuration
//! datemark config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Datemark - burn EXIF capture dates into photos as visible watermarks.
#[derive(Parser, Debug)]
#[command(name = "datemark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Watermark images with their EXIF capture date
    Process(cli::process::ProcessArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match datemark_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `datemark config path`."
            );
            datemark_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Datemark v{}", datemark_core::VERSION);

    match cli.command {
        Commands::Process(args) => cli::process::execute(args, config),
        Commands::Config(args) => cli::config::execute(args),
    }
}
