#![forbid(unsafe_code)]

//! The external conversion boundary
//!
//! The conversion library exposes exactly two functions, both taking a
//! base64-encoded UTF-8 string and returning a base64-encoded JSON envelope.
//! An empty return value means the library failed outright.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{ChildStdin, Command, ExitStatus, Stdio};
use std::thread;
use thiserror::Error;

/// Conversion direction, one per boundary function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ShareLinksToXrayJson,
    XrayJsonToShareLinks,
}

impl Direction {
    /// Exported name of the boundary function
    pub fn function_name(self) -> &'static str {
        match self {
            Direction::ShareLinksToXrayJson => "ConvertShareLinksToXrayJson",
            Direction::XrayJsonToShareLinks => "ConvertXrayJsonToShareLinks",
        }
    }

    /// Human name of the input side, used in the progress line
    pub fn input_kind(self) -> &'static str {
        match self {
            Direction::ShareLinksToXrayJson => "Share link",
            Direction::XrayJsonToShareLinks => "Xray JSON",
        }
    }
}

/// Failures reaching the conversion library at all
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to start converter '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error talking to converter '{}': {source}", .program.display())]
    Io {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("converter '{}' failed ({status}){}", .program.display(), stderr_suffix(.stderr))]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// The two-function capability provided by the conversion library
///
/// Implementations pass the request through untouched and hand back the raw
/// response text; decoding the envelope is the adapter's job.
pub trait ConversionBackend {
    fn convert_share_links_to_xray_json(&self, base64_input: &str)
    -> Result<String, BackendError>;

    fn convert_xray_json_to_share_links(&self, base64_input: &str)
    -> Result<String, BackendError>;

    /// Dispatch to the boundary function for `direction`
    fn call(&self, direction: Direction, base64_input: &str) -> Result<String, BackendError> {
        match direction {
            Direction::ShareLinksToXrayJson => self.convert_share_links_to_xray_json(base64_input),
            Direction::XrayJsonToShareLinks => self.convert_xray_json_to_share_links(base64_input),
        }
    }
}

impl<B: ConversionBackend + ?Sized> ConversionBackend for &B {
    fn convert_share_links_to_xray_json(
        &self,
        base64_input: &str,
    ) -> Result<String, BackendError> {
        (**self).convert_share_links_to_xray_json(base64_input)
    }

    fn convert_xray_json_to_share_links(
        &self,
        base64_input: &str,
    ) -> Result<String, BackendError> {
        (**self).convert_xray_json_to_share_links(base64_input)
    }
}

/// Boundary binding that runs an external converter program
///
/// The program is invoked as `<program> <FunctionName>`, receives the base64
/// request on stdin and must print the base64 response on stdout. It may
/// write output before it has read the whole request.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: PathBuf,
}

impl CommandBackend {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandBackend {
            program: program.into(),
        }
    }

    fn invoke(&self, direction: Direction, base64_input: &str) -> Result<String, BackendError> {
        let mut child = Command::new(&self.program)
            .arg(direction.function_name())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| BackendError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // stdin is fed on its own thread while stdout and stderr are drained
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer =
                stdin.map(|stdin| scope.spawn(move || write_request(stdin, base64_input)));
            let output = child.wait_with_output();
            let written = match writer {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
                None => Ok(()),
            };
            (output, written)
        });

        let output = output.map_err(|source| BackendError::Io {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(BackendError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        written.map_err(|source| BackendError::Io {
            program: self.program.clone(),
            source,
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Write the whole request, then close the pipe
fn write_request(mut stdin: ChildStdin, request: &str) -> io::Result<()> {
    match stdin.write_all(request.as_bytes()) {
        // Converter closed stdin early; its exit status decides
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

impl ConversionBackend for CommandBackend {
    fn convert_share_links_to_xray_json(
        &self,
        base64_input: &str,
    ) -> Result<String, BackendError> {
        self.invoke(Direction::ShareLinksToXrayJson, base64_input)
    }

    fn convert_xray_json_to_share_links(
        &self,
        base64_input: &str,
    ) -> Result<String, BackendError> {
        self.invoke(Direction::XrayJsonToShareLinks, base64_input)
    }
}
