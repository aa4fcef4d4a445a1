//! Path validation and resolution against the project source root
//!
//! Every scaffolding request goes through here before anything touches the
//! filesystem. Rooted paths and unexpanded shell syntax are rejected outright,
//! and `..` traversal is normalized lexically so the resolved target cannot
//! land outside the source root.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Why a requested path was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Absolute path, or a `~`/`$` the shell failed to expand
    #[error("unsafe path '{requested}': give a path relative to {root}")]
    Unsafe { requested: String, root: String },

    /// `..` traversal that would leave the source root
    #[error("path '{requested}' resolves outside {root}")]
    Escapes { requested: String, root: String },
}

/// A validated scaffolding target
///
/// Derived per invocation from the request and the configured roots; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Absolute path to create
    pub absolute: PathBuf,
    /// Path relative to the project root, for user-facing reporting
    pub relative: PathBuf,
}

/// Validate `requested` and resolve it under `source_root`
///
/// The target usually does not exist yet, so normalization is lexical rather
/// than `canonicalize`-based: `.` components are dropped and `..` pops the
/// previous component, failing if it would pop past the source root.
pub fn resolve(
    requested: &str,
    source_root: &Path,
    project_root: &Path,
) -> Result<ResolvedTarget, PathError> {
    let reject_unsafe = || PathError::Unsafe {
        requested: requested.to_string(),
        root: source_root.display().to_string(),
    };
    let reject_escape = || PathError::Escapes {
        requested: requested.to_string(),
        root: source_root.display().to_string(),
    };

    if requested.is_empty() || requested.starts_with(['/', '~', '$']) {
        return Err(reject_unsafe());
    }

    let mut kept: Vec<&OsStr> = Vec::new();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => kept.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if kept.pop().is_none() {
                    return Err(reject_escape());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(reject_unsafe()),
        }
    }

    // Everything normalized away: the request names the root itself
    if kept.is_empty() {
        return Err(reject_escape());
    }

    let mut absolute = source_root.to_path_buf();
    absolute.extend(kept.iter());

    let relative = absolute
        .strip_prefix(project_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| absolute.clone());

    Ok(ResolvedTarget { absolute, relative })
}
