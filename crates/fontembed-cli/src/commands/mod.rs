// this_file: crates/fontembed-cli/src/commands/mod.rs

//! Subcommand implementations

pub mod css;
pub mod encode;
pub mod glyphs;
pub mod verify;
