#![forbid(unsafe_code)]

//! Input format sniffing
//!
//! A purely syntactic check on the first character. Malformed input is not
//! rejected here; the conversion library reports it.

use crate::engine::Direction;

/// Which representation the input appears to be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Structured configuration document (`{...}` or `[...]`)
    XrayJson,
    /// Anything else, treated as one or more share links
    ShareLink,
}

impl InputFormat {
    /// Classify trimmed input text
    pub fn detect(input: &str) -> Self {
        if is_likely_json(input) {
            InputFormat::XrayJson
        } else {
            InputFormat::ShareLink
        }
    }

    /// The conversion that turns this format into the other one
    pub fn direction(self) -> Direction {
        match self {
            InputFormat::XrayJson => Direction::XrayJsonToShareLinks,
            InputFormat::ShareLink => Direction::ShareLinksToXrayJson,
        }
    }
}

/// True iff the first non-whitespace character is `{` or `[`
pub fn is_likely_json(input: &str) -> bool {
    let input = input.trim_start();
    input.starts_with('{') || input.starts_with('[')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_and_array_are_json() {
        assert!(is_likely_json("{\"outbounds\":[]}"));
        assert!(is_likely_json("[{\"protocol\":\"vless\"}]"));
        assert!(is_likely_json("  \n{"));
    }

    #[test]
    fn test_links_are_not_json() {
        assert!(!is_likely_json("vmess://eyJ2IjoiMiJ9"));
        assert!(!is_likely_json("vless://uuid@example.com:443?security=tls#name"));
        assert!(!is_likely_json("ss://YWVzLTI1Ni1nY206cGFzcw@1.2.3.4:8388"));
        assert!(!is_likely_json("\"{quoted}\""));
    }

    #[test]
    fn test_malformed_braces_still_classified_as_json() {
        // Rejected later by the conversion library, not here
        assert_eq!(InputFormat::detect("{not json at all"), InputFormat::XrayJson);
    }

    #[test]
    fn test_direction_is_opposite_format() {
        assert_eq!(
            InputFormat::detect("{}").direction(),
            Direction::XrayJsonToShareLinks
        );
        assert_eq!(
            InputFormat::detect("trojan://pw@host:443").direction(),
            Direction::ShareLinksToXrayJson
        );
    }
}
