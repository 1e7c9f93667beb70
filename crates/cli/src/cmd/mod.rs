//! Subcommands.

pub mod get;
pub mod set;
pub mod shift;
pub mod touch;
