#![forbid(unsafe_code)]

//! Top-level error type for a single invocation

use crate::config::ConfigError;
use crate::engine::ConvertError;
use crate::input::InputError;
use crate::output::OutputError;
use thiserror::Error;

/// Any failure that terminates an invocation
///
/// Nothing is retried: the first error is reported on the diagnostic stream
/// and the process exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
