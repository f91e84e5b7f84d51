#![forbid(unsafe_code)]

//! Input resolution: literal argument, file path, or `-` for stdin

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Argument that selects standard input
pub const STDIN_SENTINEL: &str = "-";

/// Errors raised while acquiring the input text
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {source_name}: {cause}")]
    Read {
        source_name: String,
        #[source]
        cause: io::Error,
    },

    #[error("stdin is empty")]
    EmptyStdin,

    #[error("file is empty: {}", .0.display())]
    EmptyFile(PathBuf),
}

/// Where the input text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The command-line argument itself
    Arg,
    /// A regular file named by the argument
    File(PathBuf),
    /// Standard input (`-`)
    Stdin,
}

impl InputSource {
    /// Short tag used in diagnostics: `arg`, `stdin`, or the file path
    pub fn label(&self) -> String {
        match self {
            InputSource::Arg => "arg".to_string(),
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Trimmed input text together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    text: String,
    source: InputSource,
}

impl InputRecord {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }
}

/// Resolve the command-line token, reading `-` from the given reader
///
/// Resolution order:
/// 1. `-` reads the whole reader
/// 2. A path to an existing regular file reads that file
/// 3. Anything else is taken literally
///
/// Text from stdin or a file must be non-empty after trimming. A literal
/// argument is only trimmed.
pub fn resolve_input_from<R: Read>(arg: &str, mut stdin: R) -> Result<InputRecord, InputError> {
    if arg == STDIN_SENTINEL {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .map_err(|cause| InputError::Read {
                source_name: "stdin".to_string(),
                cause,
            })?;
        let text = buf.trim();
        if text.is_empty() {
            return Err(InputError::EmptyStdin);
        }
        return Ok(InputRecord {
            text: text.to_string(),
            source: InputSource::Stdin,
        });
    }

    let path = Path::new(arg);
    if path.is_file() {
        let content = std::fs::read_to_string(path).map_err(|cause| InputError::Read {
            source_name: arg.to_string(),
            cause,
        })?;
        let text = content.trim();
        if text.is_empty() {
            return Err(InputError::EmptyFile(path.to_path_buf()));
        }
        return Ok(InputRecord {
            text: text.to_string(),
            source: InputSource::File(path.to_path_buf()),
        });
    }

    Ok(InputRecord {
        text: arg.trim().to_string(),
        source: InputSource::Arg,
    })
}
