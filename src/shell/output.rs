//! Shell output formatting with optional colors

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Writes status lines to any sink, colored unless disabled by settings.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Red bold "error:" prefix
    pub fn error(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}: {}", "error".red().bold(), msg)
        } else {
            writeln!(out, "error: {msg}")
        }
    }

    /// Yellow "Warning:" prefix
    pub fn warning(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}: {}", "Warning".yellow(), msg)
        } else {
            writeln!(out, "Warning: {msg}")
        }
    }

    /// Green checkmark
    pub fn success(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        if self.color {
            writeln!(out, "{} {}", "✓".green(), msg)
        } else {
            writeln!(out, "✓ {msg}")
        }
    }

    pub fn header(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", msg.to_string().cyan().bold())
        } else {
            writeln!(out, "{msg}")
        }
    }

    /// Plain line, never colored
    pub fn info(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        writeln!(out, "{msg}")
    }

    /// Prompt without newline
    pub fn prompt(&self, out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        if self.color {
            write!(out, "{}", msg.to_string().cyan())?;
        } else {
            write!(out, "{msg}")?;
        }
        out.flush()
    }
}
