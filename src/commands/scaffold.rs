//! Scaffold command - Create a new source file under the project src/ tree

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::fs;

use crate::config::ScaffoldConfig;
use crate::project::{resolve, source};

/// Flags for the scaffold command
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Create a module directory with an index file instead of a single file
    pub directory: bool,
    /// Overwrite an existing target instead of failing
    pub force: bool,
}

/// Execute the scaffold command
///
/// Validation happens up front: nothing is written to the filesystem until
/// the request has passed path resolution and extension inference.
pub fn execute(requested: &str, options: ScaffoldOptions, config: &ScaffoldConfig) -> Result<()> {
    let effective = effective_path(requested, options.directory, config)?;
    let target = resolve::resolve(&effective, &config.source_root, &config.project_root)?;

    if target.absolute.exists() && !options.force {
        bail!(
            "Target already exists: {} (pass --force to overwrite)",
            target.relative.display()
        );
    }

    if let Some(parent) = target.absolute.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
            let created = parent.strip_prefix(&config.project_root).unwrap_or(parent);
            println!("{} {}/", "Created:".green(), created.display());
        }
    }

    fs::write(&target.absolute, &config.header)
        .with_context(|| format!("Failed to write: {}", target.absolute.display()))?;

    println!("{} {}", "Created:".green(), target.relative.display());
    Ok(())
}

/// Work out the file a request actually names
///
/// Directory mode appends the index filename; file mode runs extension
/// inference on the final segment.
fn effective_path(requested: &str, directory: bool, config: &ScaffoldConfig) -> Result<String> {
    if requested.trim().is_empty() {
        bail!("Missing path argument");
    }

    // Path safety is judged on the raw request, ahead of extension inference
    if requested.starts_with(['/', '~', '$']) {
        return Err(resolve::PathError::Unsafe {
            requested: requested.to_string(),
            root: config.source_root.display().to_string(),
        }
        .into());
    }

    if directory {
        let module_dir = requested.trim_end_matches('/');
        return Ok(format!("{module_dir}/{}", config.index_filename));
    }

    let (parent, file_name) = match requested.rsplit_once('/') {
        Some((parent, name)) => (Some(parent), name),
        None => (None, requested),
    };
    if file_name.is_empty() {
        bail!("Missing file name: '{requested}'");
    }

    let file_name = source::apply_extension(file_name, &config.extension)?;
    Ok(match parent {
        Some(parent) => format!("{parent}/{file_name}"),
        None => file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LICENSE_HEADER;
    use std::path::PathBuf;

    fn test_config() -> (tempfile::TempDir, ScaffoldConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        let config = ScaffoldConfig::new(dir.path().to_path_buf());
        (dir, config)
    }

    fn source_entries(config: &ScaffoldConfig) -> Vec<PathBuf> {
        fs::read_dir(&config.source_root)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn test_bare_name_gets_canonical_extension() {
        let (_dir, config) = test_config();
        execute("monitor", ScaffoldOptions::default(), &config).unwrap();

        let created = config.source_root.join("monitor.rs");
        assert_eq!(fs::read_to_string(created).unwrap(), LICENSE_HEADER);
    }

    #[test]
    fn test_creates_nested_file_and_parents() {
        let (_dir, config) = test_config();
        execute("utils/linux.rs", ScaffoldOptions::default(), &config).unwrap();

        let created = config.source_root.join("utils").join("linux.rs");
        let content = fs::read_to_string(created).unwrap();
        assert!(content.starts_with("/*\n"));
        assert!(content.contains("Apache License"));
    }

    #[test]
    fn test_directory_mode_creates_index() {
        let (_dir, config) = test_config();
        let options = ScaffoldOptions {
            directory: true,
            ..Default::default()
        };
        execute("monitor", options, &config).unwrap();

        let index = config.source_root.join("monitor").join("mod.rs");
        assert_eq!(fs::read_to_string(index).unwrap(), LICENSE_HEADER);
    }

    #[test]
    fn test_directory_mode_creates_missing_ancestors() {
        let (_dir, config) = test_config();
        let options = ScaffoldOptions {
            directory: true,
            ..Default::default()
        };
        execute("platform/linux", options, &config).unwrap();

        assert!(config
            .source_root
            .join("platform")
            .join("linux")
            .join("mod.rs")
            .is_file());
    }

    #[test]
    fn test_unsafe_path_writes_nothing() {
        let (_dir, config) = test_config();
        for requested in ["/etc/passwd", "~/notes", "$HOME/notes"] {
            let result = execute(requested, ScaffoldOptions::default(), &config);
            assert!(result.is_err(), "{requested} should be rejected");
        }
        assert!(source_entries(&config).is_empty());
    }

    #[test]
    fn test_unsafe_prefix_wins_over_extension_check() {
        let (_dir, config) = test_config();
        for requested in ["/etc/passwd.md", "~/notes.md", "$HOME/x.md"] {
            let message = execute(requested, ScaffoldOptions::default(), &config)
                .unwrap_err()
                .to_string();
            assert!(
                message.contains("unsafe path"),
                "{requested}: got '{message}'"
            );
        }
        assert!(source_entries(&config).is_empty());
    }

    #[test]
    fn test_escaping_path_writes_nothing() {
        let (dir, config) = test_config();
        let result = execute("../escape.rs", ScaffoldOptions::default(), &config);
        assert!(result.is_err());
        assert!(!dir.path().join("escape.rs").exists());
        assert!(source_entries(&config).is_empty());
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let (_dir, config) = test_config();
        let result = execute("docs/notes.md", ScaffoldOptions::default(), &config);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unrecognized extension"));

        // Not even the parent directory is created
        assert!(source_entries(&config).is_empty());
    }

    #[test]
    fn test_existing_target_is_not_clobbered() {
        let (_dir, config) = test_config();
        execute("monitor.rs", ScaffoldOptions::default(), &config).unwrap();

        let created = config.source_root.join("monitor.rs");
        fs::write(&created, "pub fn get_monitors() {}\n").unwrap();

        let result = execute("monitor.rs", ScaffoldOptions::default(), &config);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("already exists"));
        assert_eq!(
            fs::read_to_string(&created).unwrap(),
            "pub fn get_monitors() {}\n"
        );
    }

    #[test]
    fn test_force_truncates_instead_of_appending() {
        let (_dir, config) = test_config();
        execute("monitor.rs", ScaffoldOptions::default(), &config).unwrap();

        let options = ScaffoldOptions {
            force: true,
            ..Default::default()
        };
        execute("monitor.rs", options, &config).unwrap();

        // Exactly one header, never two
        let content = fs::read_to_string(config.source_root.join("monitor.rs")).unwrap();
        assert_eq!(content, LICENSE_HEADER);
        assert_eq!(content.matches("Copyright").count(), 1);
    }

    #[test]
    fn test_empty_request_fails() {
        let (_dir, config) = test_config();
        assert!(execute("", ScaffoldOptions::default(), &config).is_err());
        assert!(execute("  ", ScaffoldOptions::default(), &config).is_err());
    }

    #[test]
    fn test_trailing_slash_in_file_mode_fails() {
        let (_dir, config) = test_config();
        let result = execute("utils/", ScaffoldOptions::default(), &config);
        assert!(result.is_err());
        assert!(source_entries(&config).is_empty());
    }
}
