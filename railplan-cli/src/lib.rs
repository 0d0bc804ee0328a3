//! Library half of the `railplan` binary.
//!
//! Argument parsing stays in `main.rs`; everything here takes clap-free
//! settings and an output writer so it can be driven from tests.

pub mod commands;
pub mod settings;
