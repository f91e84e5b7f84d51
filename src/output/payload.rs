#![forbid(unsafe_code)]

//! Writes the converted payload to the result stream

use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no data to print")]
    NoData,

    #[error("failed writing output: {0}")]
    Write(#[from] io::Error),
}

/// Write the envelope's `data` payload, newline-terminated
///
/// The conversion library may wrap textual results (share links) in a JSON
/// string literal. Such a payload is unwrapped and trimmed; anything else is
/// written verbatim.
pub fn write_payload<W: Write>(out: &mut W, payload: &str) -> Result<(), OutputError> {
    if payload.is_empty() {
        return Err(OutputError::NoData);
    }

    if let Ok(text) = serde_json::from_str::<String>(payload) {
        writeln!(out, "{}", text.trim())?;
    } else {
        out.write_all(payload.as_bytes())?;
        if !payload.ends_with('\n') {
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(payload: &str) -> String {
        let mut out = Vec::new();
        write_payload(&mut out, payload).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_string_payload_is_unwrapped() {
        assert_eq!(render("\"hello\\n\""), "hello\n");
    }

    #[test]
    fn test_multiline_links_are_unwrapped_and_trimmed() {
        assert_eq!(
            render(r#""  vless://a@b:443\ntrojan://p@c:443\n\n""#),
            "vless://a@b:443\ntrojan://p@c:443\n"
        );
    }

    #[test]
    fn test_object_payload_is_verbatim() {
        let payload = "{\n  \"outbounds\": []\n}";
        assert_eq!(render(payload), format!("{}\n", payload));
    }

    #[test]
    fn test_existing_trailing_newline_is_kept_single() {
        assert_eq!(render("[1,2]\n"), "[1,2]\n");
    }

    #[test]
    fn test_empty_payload() {
        let mut out = Vec::new();
        let err = write_payload(&mut out, "").unwrap_err();
        assert!(matches!(err, OutputError::NoData));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_payload(&mut Closed, "{}").unwrap_err();
        assert!(matches!(err, OutputError::Write(_)));
    }
}
