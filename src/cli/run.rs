#![forbid(unsafe_code)]

//! One invocation: resolve input, classify, convert, print

use super::args::Cli;
use crate::config::Config;
use crate::engine::{CommandBackend, ConversionBackend, Converter};
use crate::error::AppError;
use crate::format::InputFormat;
use crate::input::{InputSource, resolve_input_from};
use crate::output::{Diagnostics, write_payload};
use std::io::{self, Read, Write};
use termcolor::WriteColor;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Run the tool against the real process streams and environment
///
/// Returns the process exit code. Errors are reported on stderr.
pub fn run(cli: &Cli) -> i32 {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let mut diagnostics = Diagnostics::stderr(config.color);
    let converter = Converter::new(CommandBackend::new(&config.converter));
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run_conversion(&cli.input, &converter, stdin, &mut stdout, &mut diagnostics) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            diagnostics.line(format_args!("Error: {}", e));
            EXIT_ERROR
        }
    }
}

/// Convert `arg` and write the result to `stdout`
///
/// `stdin` is only read when `arg` is `-`.
pub fn run_conversion<B, R, W, D>(
    arg: &str,
    converter: &Converter<B>,
    stdin: R,
    stdout: &mut W,
    diagnostics: &mut Diagnostics<D>,
) -> Result<(), AppError>
where
    B: ConversionBackend,
    R: Read,
    W: Write,
    D: WriteColor,
{
    let input = resolve_input_from(arg, stdin)?;

    diagnostics.line(format_args!("Input: {}", arg));
    if input.source() != &InputSource::Arg {
        diagnostics.line(format_args!("Input source: {}", input.source()));
    }

    let direction = InputFormat::detect(input.text()).direction();
    diagnostics.line(format_args!("Processing {}...", direction.input_kind()));

    let conversion = converter.convert_inspecting(direction, input.text(), |response| {
        diagnostics.line(response)
    })?;

    write_payload(stdout, conversion.data())?;
    Ok(())
}
