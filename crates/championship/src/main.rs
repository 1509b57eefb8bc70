//! Championship CLI
//!
//! Load a crosstable snapshot and explore what-if results interactively.

mod config;
mod render;
mod shell;

use anyhow::{Context, Result};
use championship_core::{Championship, SnapshotFile};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use crate::config::ShellConfig;
use crate::render::render_standings;
use crate::shell::Shell;

#[derive(Parser)]
#[command(
    name = "championship",
    version,
    about = "Recreate round-robin championship standings and simulate pending games"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Shell config file (defaults to ./championship.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command shell
    Interactive {
        /// Crosstable snapshot (.toml or .json)
        snapshot: PathBuf,
    },
    /// Print the current standings and exit
    Show {
        /// Crosstable snapshot (.toml or .json)
        snapshot: PathBuf,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn load(snapshot: &Path) -> Result<Championship> {
    Championship::ingest(&SnapshotFile::new(snapshot))
        .with_context(|| format!("failed to load snapshot {}", snapshot.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = ShellConfig::locate(cli.config.as_deref());
    let config = ShellConfig::load(config_path.as_deref())?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match &config_path {
        Some(path) => log::debug!("Loaded config from {}", path.display()),
        None => log::debug!("No config file, using defaults"),
    }

    match cli.command {
        Commands::Interactive { snapshot } => {
            let championship = load(&snapshot)?;
            let interactive = io::stdin().is_terminal();
            let mut shell = Shell::new(championship, config, io::stdout(), io::stderr());
            shell
                .run(io::stdin().lock(), interactive)
                .context("shell terminated")?;
        }
        Commands::Show { snapshot, json } => {
            let championship = load(&snapshot)?;
            let standings = championship.state();
            if json {
                let text = serde_json::to_string_pretty(&standings)
                    .context("failed to serialize standings")?;
                println!("{text}");
            } else {
                print!("{}", render_standings(&standings, championship.name(), &config));
            }
        }
    }
    Ok(())
}
