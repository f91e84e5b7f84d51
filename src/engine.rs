//! Conversion adapter and the external conversion boundary

pub mod adapter;
pub mod backend;

pub use adapter::{Conversion, ConvertError, Converter};
pub use backend::{BackendError, CommandBackend, ConversionBackend, Direction};
