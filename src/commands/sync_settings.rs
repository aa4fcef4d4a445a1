//! Sync-settings command - Keep the editor settings pointing at the right server binary

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::project::settings::{self, SyncOutcome, SERVER_PATH_KEY};

/// Execute the sync-settings command
pub fn execute(settings_path: &Path, server_path: &Path) -> Result<()> {
    let outcome = settings::sync(settings_path, server_path)?;

    match outcome {
        SyncOutcome::Created => {
            println!("{} {}", "Created:".green(), settings_path.display());
        }
        SyncOutcome::Replaced => {
            println!("{} {}", "Updated:".green(), settings_path.display());
        }
        SyncOutcome::Inserted => {
            // Historically a silent no-op; surfaced until clarified whether
            // the key is guaranteed to pre-exist.
            eprintln!(
                "{} '{}' was missing from {}; added it",
                "warning:".yellow(),
                SERVER_PATH_KEY,
                settings_path.display()
            );
            println!("{} {}", "Updated:".green(), settings_path.display());
        }
    }

    Ok(())
}
