//! Common utilities for reading and updating file modification times.

#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
extern crate tracing;

pub mod errors;
pub mod fs;
pub mod time;
