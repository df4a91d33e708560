//! Output helpers for the CLI.
//!
//! The prompt line itself goes to stdout untouched. Everything else the tool has
//! to say goes to stderr, so a failing render never leaks text into the prompt.

use colored::*;
use std::io::Write;

/// Formats and prints an error message to stderr
///
/// # Format
/// ```text
/// porcelain: <message>
/// ```
///
/// # Colors
/// - "porcelain:" in red
pub fn print_error(message: &str) {
    eprintln!("{} {}", "porcelain:".red(), message);
}

/// Writes the rendered prompt line to `out`
///
/// `newline` is off for the `fmt` output, which shells embed directly.
pub fn write_line<W: Write>(out: &mut W, line: &str, newline: bool) -> std::io::Result<()> {
    if newline {
        writeln!(out, "{line}")?;
    } else {
        write!(out, "{line}")?;
    }
    out.flush()
}
