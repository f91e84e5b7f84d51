#![forbid(unsafe_code)]

//! Command-line arguments

use clap::Parser;

/// Convert between Xray JSON configuration and proxy share links
///
/// JSON input (starting with `{` or `[`) is converted to share links; anything
/// else is treated as share links and converted to Xray JSON. The result is
/// written to stdout; progress and errors go to stderr.
#[derive(Debug, Parser)]
#[command(name = "xray-link-json", version)]
pub struct Cli {
    /// Share link, Xray JSON, path to a file containing either, or '-' for stdin
    #[arg(value_name = "INPUT", value_parser = non_blank)]
    pub input: String,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(
            "Please provide a Share link, Xray JSON, file path, or '-' for stdin".to_string(),
        );
    }
    Ok(value.to_string())
}
