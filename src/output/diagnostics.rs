#![forbid(unsafe_code)]

//! Diagnostic stream
//!
//! Progress lines, input echo and errors go to stderr so that stdout carries
//! only the conversion result. On an interactive terminal the lines are
//! dimmed to gray.

use crate::config::ColorOption;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Line-oriented writer for diagnostics
pub struct Diagnostics<W: WriteColor> {
    out: W,
}

impl Diagnostics<StandardStream> {
    /// Diagnostics on stderr, colored per `color` and terminal detection
    pub fn stderr(color: ColorOption) -> Self {
        let choice = color.to_color_choice(io::stderr().is_terminal());
        Diagnostics::new(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> Diagnostics<W> {
    pub fn new(out: W) -> Self {
        Diagnostics { out }
    }

    /// Write one message followed by a newline
    ///
    /// Failures writing to the diagnostic stream are ignored; they must not
    /// abort a conversion whose result goes elsewhere.
    pub fn line(&mut self, message: impl Display) {
        let _ = self.write_line(&message);
    }

    fn write_line(&mut self, message: &dyn Display) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
        write!(self.out, "{}", message)?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    #[test]
    fn test_plain_lines_without_color() {
        let mut diagnostics = Diagnostics::new(NoColor::new(Vec::new()));
        diagnostics.line("Input: vmess://eyJ2IjoiMiJ9");
        diagnostics.line(format_args!("Input source: {}", "stdin"));

        let written = String::from_utf8(diagnostics.into_inner().into_inner()).unwrap();
        assert_eq!(written, "Input: vmess://eyJ2IjoiMiJ9\nInput source: stdin\n");
    }

    #[test]
    fn test_colored_lines_are_wrapped_and_reset() {
        let mut diagnostics = Diagnostics::new(Ansi::new(Vec::new()));
        diagnostics.line("Processing Share link...");

        let written = String::from_utf8(diagnostics.into_inner().into_inner()).unwrap();
        assert!(written.starts_with("\x1b["));
        assert!(written.contains("Processing Share link..."));
        assert!(written.ends_with("\x1b[0m\n"));
    }
}
