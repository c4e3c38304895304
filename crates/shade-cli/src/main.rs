//! shade: generate printable lampshades for a star ornament mount.
//!
//! # Logging
//!
//! `RUST_LOG` takes precedence over the `-v` flags, e.g.
//! `RUST_LOG=shade_mesh=debug shade generate --mode spirals`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod commands;
mod output;

use args::DesignArgs;
use commands::{generate, info, save};

/// Procedural lampshade generator with ASCII STL export.
#[derive(Parser)]
#[command(name = "shade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a lampshade and export it as ASCII STL
    Generate {
        #[command(flatten)]
        design: DesignArgs,

        /// Output file or directory (defaults to the design's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the resolved design to a design file
    Save {
        #[command(flatten)]
        design: DesignArgs,

        /// Output file or directory (defaults to the design's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the resolved design, its derived geometry and mesh statistics
    Info {
        #[command(flatten)]
        design: DesignArgs,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "shade_design=info,shade_mesh=info,shade=info",
            2 => "shade_design=debug,shade_mesh=debug,shade=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Generate { design, output } => generate::run(design, output.as_deref(), &cli),
        Commands::Save { design, output } => save::run(design, output.as_deref(), &cli),
        Commands::Info { design } => info::run(design, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
