//! CLI subcommand implementations.

pub mod manifest;
pub mod photos;
