// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Rich diagnostic rendering using miette.
//!
//! Converts core diagnostics into miette-formatted reports with:
//! - The offending line as source context
//! - A labeled arrow pointing at the error location
//! - The stable diagnostic code as the label

use exprline_core::source_analysis::Diagnostic as CoreDiagnostic;
use miette::{Diagnostic, SourceSpan};

/// One expression-line diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(exprline::parse))]
pub struct ReportDiagnostic {
    /// Human-readable error message.
    pub message: String,
    /// The line being checked, as source context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error within the line.
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (the stable code).
    pub label: String,
}

impl ReportDiagnostic {
    /// Creates a rich diagnostic from a core diagnostic and its line.
    #[must_use]
    pub fn from_diagnostic(diagnostic: &CoreDiagnostic, line: &str) -> Self {
        Self {
            message: diagnostic.message.to_string(),
            src: miette::NamedSource::new("<input>", line.to_string()),
            span: diagnostic.span.into(),
            label: diagnostic.code.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprline_core::source_analysis::{DiagnosticCode, Span};

    #[test]
    fn from_diagnostic_maps_fields() {
        let core = CoreDiagnostic::new(
            DiagnosticCode::MissingCloseParen,
            "Missing ')' to match '('",
            Span::new(0, 1),
        );
        let report = ReportDiagnostic::from_diagnostic(&core, "(a+b");

        assert_eq!(report.message, "Missing ')' to match '('");
        assert_eq!(report.span.offset(), 0);
        assert_eq!(report.span.len(), 1);
        assert_eq!(report.label, "E003");
    }

    #[test]
    fn from_diagnostic_zero_length_span() {
        let core = CoreDiagnostic::new(
            DiagnosticCode::UnexpectedFactorToken,
            "Expected identifier, integer literal, or '(' but found '<eof>'",
            Span::new(2, 2),
        );
        let report = ReportDiagnostic::from_diagnostic(&core, "a+");

        assert_eq!(report.span.offset(), 2);
        assert_eq!(report.span.len(), 0);
        assert_eq!(report.label, "E004");
    }
}
