//! Git subprocess execution for the `gt` shortcut tool.
//!
//! This crate owns spawning the `git` binary so the dispatcher does not
//! need to deal with `std::process::Command` directly.

pub mod runner;

pub use runner::{GitError, Result, capture, run};
