//! devshell-helper: CLI for project dev-shell chores
//!
//! Bundles the two small utilities the development environment wires up: a
//! source-file scaffolder and an editor settings synchronizer. Both are
//! stateless, run to completion, and anchor every relative path at the
//! project root.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod project;

#[derive(Parser)]
#[command(name = "devshell-helper")]
#[command(about = "Helper CLI for dev-shell chores", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new source file under the project src/ tree
    Scaffold {
        /// Path to create, relative to <root>/src
        path: String,

        /// Create a module directory with a mod.rs index instead of a file
        #[arg(short, long)]
        directory: bool,

        /// Overwrite the target if it already exists
        #[arg(short, long)]
        force: bool,

        /// Project root (defaults to $PROJECT_ROOT)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Create or update the project's .vscode/settings.json
    SyncSettings {
        /// rust-analyzer binary to record in the settings
        server_path: PathBuf,

        /// Settings file to write (defaults to <root>/.vscode/settings.json)
        #[arg(long)]
        settings_file: Option<PathBuf>,

        /// Project root (defaults to $PROJECT_ROOT)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scaffold {
            path,
            directory,
            force,
            root,
        } => {
            let project_root = config::project_root(root)?;
            let config = config::ScaffoldConfig::new(project_root);
            let options = commands::scaffold::ScaffoldOptions { directory, force };
            commands::scaffold::execute(&path, options, &config)?;
        }

        Commands::SyncSettings {
            server_path,
            settings_file,
            root,
        } => {
            let settings_path = match settings_file {
                Some(path) => path,
                None => config::settings_path(&config::project_root(root)?),
            };
            commands::sync_settings::execute(&settings_path, &server_path)?;
        }
    }

    Ok(())
}
