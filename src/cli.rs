//! CLI argument parsing and run orchestration

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{EXIT_ERROR, EXIT_SUCCESS, run, run_conversion};
