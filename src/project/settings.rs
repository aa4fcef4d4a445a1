//! Settings document model for the project's `.vscode/settings.json`
//!
//! The synchronizer owns exactly one key in the document. A missing file is
//! created from the full default template; an existing file is parsed as
//! order-preserving JSON, has that one key set, and is written back with every
//! other key untouched.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The one settings key this tool keeps in sync
pub const SERVER_PATH_KEY: &str = "rust-analyzer.server.path";

/// Default settings document written when no settings file exists yet
///
/// Only the server path varies per invocation. The terminal and editor fields
/// are baked-in defaults, not independently configurable here.
#[derive(Debug, Serialize)]
pub struct SettingsTemplate {
    #[serde(rename = "rust-analyzer.server.path")]
    server_path: String,
    #[serde(rename = "terminal.integrated.profiles.linux")]
    terminal_profiles: BTreeMap<String, TerminalProfile>,
    #[serde(rename = "terminal.integrated.defaultProfile.linux")]
    default_profile: String,
    #[serde(rename = "editor.insertSpaces")]
    insert_spaces: bool,
}

#[derive(Debug, Serialize)]
struct TerminalProfile {
    path: String,
}

impl SettingsTemplate {
    pub fn with_server_path(server_path: &Path) -> Self {
        let terminal_profiles = ["bash", "zsh"]
            .into_iter()
            .map(|shell| {
                (
                    shell.to_string(),
                    TerminalProfile {
                        path: shell.to_string(),
                    },
                )
            })
            .collect();

        Self {
            server_path: server_path.display().to_string(),
            terminal_profiles,
            default_profile: "zsh".to_string(),
            insert_spaces: true,
        }
    }
}

/// What `sync` did to the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// File did not exist; written with full defaults
    Created,
    /// Key existed; its value was replaced
    Replaced,
    /// Key was missing from an existing file; it was added
    Inserted,
}

/// Create or update `settings_path` so [`SERVER_PATH_KEY`] points at `server_path`
///
/// Runs unconditionally, with no old-vs-new comparison; re-running is a fixed
/// point after the first write.
pub fn sync(settings_path: &Path, server_path: &Path) -> Result<SyncOutcome> {
    if !settings_path.exists() {
        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }
        let template = SettingsTemplate::with_server_path(server_path);
        write_document(settings_path, &serde_json::to_value(&template)?)?;
        return Ok(SyncOutcome::Created);
    }

    let content = fs::read_to_string(settings_path)
        .with_context(|| format!("Failed to read: {}", settings_path.display()))?;
    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse: {}", settings_path.display()))?;

    let Some(object) = document.as_object_mut() else {
        bail!("Not a settings object: {}", settings_path.display());
    };

    let outcome = if object.contains_key(SERVER_PATH_KEY) {
        SyncOutcome::Replaced
    } else {
        SyncOutcome::Inserted
    };
    object.insert(
        SERVER_PATH_KEY.to_string(),
        Value::String(server_path.display().to_string()),
    );

    write_document(settings_path, &document)?;
    Ok(outcome)
}

fn write_document(settings_path: &Path, document: &Value) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    fs::write(settings_path, rendered)
        .with_context(|| format!("Failed to write: {}", settings_path.display()))
}
