//! Cucumber scenarios for the `railplan` binary.
//!
//! The steps live in `tests/cucumber.rs`; this crate only hosts them so the
//! acceptance suite stays out of the production crates.
