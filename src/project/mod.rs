//! Core project-tree operations

pub mod resolve;
pub mod settings;
pub mod source;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use resolve::{resolve, ResolvedTarget};
#[allow(unused_imports)]
pub use settings::{sync, SyncOutcome};
