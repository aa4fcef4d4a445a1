//! Project root discovery and built-in scaffolding defaults

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the project root directory
pub const PROJECT_ROOT_ENV: &str = "PROJECT_ROOT";

/// Directory under the project root that scaffolded sources live in
pub const SOURCE_DIR: &str = "src";

/// The one recognized extension for scaffolded source files
pub const SOURCE_EXTENSION: &str = "rs";

/// Entry-point filename for a scaffolded module directory
pub const INDEX_FILENAME: &str = "mod.rs";

/// Notice written at the top of every scaffolded file
pub const LICENSE_HEADER: &str = "/*
Copyright 2021 David Karrick

Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
<LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
option. This file may not be copied, modified, or distributed
except according to those terms.
*/

";

/// Resolve the project root: an explicit flag wins, otherwise $PROJECT_ROOT
///
/// Read once at startup; every relative path in the process is anchored here.
pub fn project_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let root = match flag {
        Some(path) => path,
        None => match env::var_os(PROJECT_ROOT_ENV) {
            Some(var) => PathBuf::from(var),
            None => bail!("Project root not set; pass --root or export {PROJECT_ROOT_ENV}"),
        },
    };

    root.canonicalize()
        .with_context(|| format!("Failed to resolve project root: {}", root.display()))
}

/// Settings file kept in sync for the project (`<root>/.vscode/settings.json`)
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(".vscode").join("settings.json")
}

/// Scaffolding parameters
///
/// `new` fills the built-in defaults; tests can substitute their own header
/// text or extension without touching the command logic.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Project root, used for user-facing relative paths
    pub project_root: PathBuf,
    /// Directory new sources are resolved against (`<root>/src`)
    pub source_root: PathBuf,
    /// Canonical extension, appended when a request has none
    pub extension: String,
    /// Index filename used in directory mode
    pub index_filename: String,
    /// Header block written into every new file
    pub header: String,
}

impl ScaffoldConfig {
    pub fn new(project_root: PathBuf) -> Self {
        let source_root = project_root.join(SOURCE_DIR);
        Self {
            project_root,
            source_root,
            extension: SOURCE_EXTENSION.to_string(),
            index_filename: INDEX_FILENAME.to_string(),
            header: LICENSE_HEADER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let root = project_root(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_project_root_missing_dir_fails() {
        let result = project_root(Some(PathBuf::from("/nonexistent/project/root")));
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_path_layout() {
        let path = settings_path(Path::new("/work/project"));
        assert_eq!(path, PathBuf::from("/work/project/.vscode/settings.json"));
    }

    #[test]
    fn test_scaffold_config_defaults() {
        let config = ScaffoldConfig::new(PathBuf::from("/work/project"));
        assert_eq!(config.source_root, PathBuf::from("/work/project/src"));
        assert_eq!(config.extension, "rs");
        assert_eq!(config.index_filename, "mod.rs");
        assert!(config.header.starts_with("/*\n"));
        assert!(config.header.trim_end().ends_with("*/"));
    }
}
