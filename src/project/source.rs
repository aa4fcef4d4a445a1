//! File-kind inference for scaffolded sources
//!
//! Only one kind of file is ever scaffolded. A request with no extension gets
//! the canonical one appended; a request with any other extension is refused
//! rather than guessed at.

use thiserror::Error;

/// Why a requested file name was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("unrecognized extension '.{found}': expected .{expected}")]
    UnrecognizedExtension { found: String, expected: String },
}

/// Apply extension inference to a bare file name
///
/// Everything after the **first** `.` counts as the extension, so a name like
/// `archive.tar.gz` is rejected as `.tar.gz`, not `.gz`.
pub fn apply_extension(file_name: &str, extension: &str) -> Result<String, SourceError> {
    match file_name.split_once('.') {
        None => Ok(format!("{file_name}.{extension}")),
        Some((_, found)) if found == extension => Ok(file_name.to_string()),
        Some((_, found)) => Err(SourceError::UnrecognizedExtension {
            found: found.to_string(),
            expected: extension.to_string(),
        }),
    }
}
