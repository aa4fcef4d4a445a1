//! CLI commands

pub mod scaffold;
pub mod sync_settings;
