// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! The line-oriented checking session.
//!
//! Reads expression lines until the sentinel line `end` (ASCII
//! case-insensitive), skipping blank lines. Each remaining line is lexed
//! and parsed with fresh state; the result is either the parse tree
//! (pre-order, one label per line) or a diagnostic report:
//!
//! ```text
//! - [E001] Missing '+' or '-' between terms before 'b' (at position 2)
//! a b
//!   ^
//! ```
//!
//! The caret marks the first diagnostic's offset only, even when the line
//! produced several.

use std::io::{self, BufRead, Write};

use tracing::debug;

use exprline_core::source_analysis::{Diagnostic, parse_line};

use crate::diagnostic::ReportDiagnostic;

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// The plain `- [CODE] MESSAGE (at position N)` list with an echoed
    /// line and a caret under the first diagnostic.
    #[default]
    Plain,
    /// miette-rendered reports with source context, written to stderr.
    Fancy,
}

/// Runs a checking session: reads lines from `input` until the sentinel,
/// writing results to `output`.
///
/// # Errors
///
/// Returns any I/O error from the reader or writer.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    style: ReportStyle,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.eq_ignore_ascii_case("end") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        check_line(&line, output, style)?;
    }
    Ok(())
}

/// Checks a single line and writes the tree or the diagnostic report.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn check_line<W: Write>(line: &str, output: &mut W, style: ReportStyle) -> io::Result<()> {
    let (tree, diagnostics) = parse_line(line);
    debug!(
        line,
        diagnostics = diagnostics.len(),
        "parsed expression line"
    );

    if diagnostics.is_empty() {
        write!(output, "{}", tree.pretty())?;
        return Ok(());
    }

    match style {
        ReportStyle::Plain => write_plain_report(line, &diagnostics, output),
        ReportStyle::Fancy => {
            for diagnostic in &diagnostics {
                let report = ReportDiagnostic::from_diagnostic(diagnostic, line);
                eprintln!("{:?}", miette::Report::new(report));
            }
            Ok(())
        }
    }
}

/// Writes the plain diagnostic report: the list, the echoed line, and the
/// caret under the first diagnostic.
fn write_plain_report<W: Write>(
    line: &str,
    diagnostics: &[Diagnostic],
    output: &mut W,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(
            output,
            "- [{}] {} (at position {})",
            diagnostic.code,
            diagnostic.message,
            diagnostic.span.start()
        )?;
    }

    writeln!(output, "{line}")?;
    let offset = diagnostics[0].span.start() as usize;
    writeln!(output, "{}^", " ".repeat(offset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(line: &str) -> String {
        let mut out = Vec::new();
        check_line(line, &mut out, ReportStyle::Plain).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("session output is UTF-8")
    }

    #[test]
    fn clean_line_prints_tree() {
        assert_eq!(check("a"), "EXPR\n  TERM\n    IDENT(a)\n");
    }

    #[test]
    fn diagnostics_suppress_tree() {
        let out = check("a b");
        assert_eq!(
            out,
            "- [E001] Missing '+' or '-' between terms before 'b' (at position 2)\n\
             a b\n\
             \x20 ^\n"
        );
    }

    #[test]
    fn caret_marks_first_diagnostic_only() {
        let out = check("a b c");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4); // two diagnostics, echo, caret
        assert_eq!(lines[2], "a b c");
        assert_eq!(lines[3], "  ^");
    }

    #[test]
    fn caret_at_position_zero() {
        let out = check(")");
        assert!(out.ends_with(")\n^\n"), "unexpected output: {out:?}");
    }
}
