//! devshell-helper library
//!
//! Core functionality for the dev-shell helper CLI: scaffolding new source
//! files under a project tree and keeping the project's editor settings in
//! sync with the toolchain the shell provides.

pub mod config;
pub mod project;
