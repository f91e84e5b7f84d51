//! Result and diagnostic output

pub mod diagnostics;
pub mod payload;

pub use diagnostics::Diagnostics;
pub use payload::{OutputError, write_payload};
