#![forbid(unsafe_code)]

//! Conversion adapter
//!
//! Encodes the input as base64, calls the boundary function for the chosen
//! direction, then decodes the base64 response into a conversion envelope:
//!
//! ```json
//! {"success": true, "data": <any JSON>, "error": ""}
//! ```
//!
//! `data` stays opaque; it is handed to the output writer as raw JSON text.

use super::backend::{BackendError, ConversionBackend, Direction};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;

/// Errors produced while turning a boundary response into a payload
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("empty conversion result")]
    EmptyResponse,

    #[error("failed to decode base64 output: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("failed to parse conversion payload: {0}")]
    EnvelopeParse(#[from] serde_json::Error),

    #[error("conversion failed{}", failure_detail(.0))]
    ConversionFailed(Option<String>),

    #[error("conversion returned empty data")]
    EmptyData,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

fn failure_detail(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

impl ConvertError {
    /// Message reported by the conversion library, if any
    pub fn library_message(&self) -> Option<&str> {
        match self {
            ConvertError::ConversionFailed(message) => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConversionEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<String>,
}

/// A successful conversion
#[derive(Debug)]
pub struct Conversion {
    direction: Direction,
    data: Box<RawValue>,
}

impl Conversion {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Raw JSON text of the envelope's `data` field
    pub fn data(&self) -> &str {
        self.data.get()
    }
}

/// Runs conversions through a [`ConversionBackend`]
pub struct Converter<B> {
    backend: B,
}

impl<B: ConversionBackend> Converter<B> {
    pub fn new(backend: B) -> Self {
        Converter { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Convert `input` in the given direction
    ///
    /// Single attempt, no retries.
    pub fn convert(&self, direction: Direction, input: &str) -> Result<Conversion, ConvertError> {
        self.convert_inspecting(direction, input, |_| {})
    }

    /// Like [`Converter::convert`], handing the decoded envelope text to
    /// `inspect` before it is parsed, whether or not the conversion succeeds
    pub fn convert_inspecting<F>(
        &self,
        direction: Direction,
        input: &str,
        inspect: F,
    ) -> Result<Conversion, ConvertError>
    where
        F: FnOnce(&str),
    {
        let request = STANDARD.encode(input.as_bytes());
        let response = self.backend.call(direction, &request)?;
        let decoded = decode_base64(&response)?;
        inspect(&String::from_utf8_lossy(&decoded));
        parse_envelope(direction, &decoded)
    }

    pub fn share_links_to_xray_json(&self, links: &str) -> Result<Conversion, ConvertError> {
        self.convert(Direction::ShareLinksToXrayJson, links)
    }

    pub fn xray_json_to_share_links(&self, config: &str) -> Result<Conversion, ConvertError> {
        self.convert(Direction::XrayJsonToShareLinks, config)
    }
}

/// Decode a base64 boundary response into its `data` payload
pub fn decode_response(direction: Direction, encoded: &str) -> Result<Conversion, ConvertError> {
    parse_envelope(direction, &decode_base64(encoded)?)
}

/// Base64-decode a response, skipping line breaks inside it
fn decode_base64(encoded: &str) -> Result<Vec<u8>, ConvertError> {
    if encoded.is_empty() {
        return Err(ConvertError::EmptyResponse);
    }

    let unwrapped: Vec<u8> = encoded
        .bytes()
        .filter(|&b| !matches!(b, b'\r' | b'\n'))
        .collect();
    Ok(STANDARD.decode(unwrapped)?)
}

fn parse_envelope(direction: Direction, decoded: &[u8]) -> Result<Conversion, ConvertError> {
    let envelope: ConversionEnvelope = serde_json::from_slice(decoded)?;

    if !envelope.success {
        let message = envelope.error.filter(|e| !e.is_empty());
        return Err(ConvertError::ConversionFailed(message));
    }

    // `null` deserializes to None as well
    let data = envelope.data.ok_or(ConvertError::EmptyData)?;

    Ok(Conversion { direction, data })
}
