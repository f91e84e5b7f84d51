#![forbid(unsafe_code)]

//! xray-link-json: convert between Xray JSON configuration and share links
//!
//! The tool sniffs whether its input is a JSON document or a share link and
//! hands it to an external conversion library for the opposite direction.
//! The conversion itself happens entirely on the other side of
//! [`engine::ConversionBackend`].

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod output;
