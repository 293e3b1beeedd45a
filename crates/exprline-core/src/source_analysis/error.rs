// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic codes and lexical-error payloads.
//!
//! Every problem the front end can report carries a stable code from the
//! `E001`–`E007` range. Lexical errors are special: the lexer embeds a
//! [`LexErrorKind`] in the offending token, and the parser converts it
//! into a [`Diagnostic`](super::Diagnostic) when the token is consumed.

use ecow::EcoString;
use thiserror::Error;

/// The stable code attached to every diagnostic.
///
/// Codes are part of the tool's output format and never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// E001: a term follows another term with no `+`/`-` between them.
    MissingAdditiveOperator,
    /// E002: a factor follows a multiplicative chain with no `*`/`/`.
    MissingMultiplicativeOperator,
    /// E003: a `(` was never closed.
    MissingCloseParen,
    /// E004: a token that cannot start a factor appeared where one was
    /// expected.
    UnexpectedFactorToken,
    /// E005: an integer literal run mixing digits with letters.
    InvalidIntegerLiteral,
    /// E006: a character with no place in the language.
    InvalidCharacter,
    /// E007: tokens left over after the top-level expression.
    TrailingInput,
}

impl DiagnosticCode {
    /// Returns the stable wire code, e.g. `"E001"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingAdditiveOperator => "E001",
            Self::MissingMultiplicativeOperator => "E002",
            Self::MissingCloseParen => "E003",
            Self::UnexpectedFactorToken => "E004",
            Self::InvalidIntegerLiteral => "E005",
            Self::InvalidCharacter => "E006",
            Self::TrailingInput => "E007",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of lexical error embedded in an error token.
///
/// The display string is the diagnostic message surfaced to the user, so
/// the wording lives in one place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A digit-initial run that consumed letters or underscores.
    #[error("Invalid integer literal (digits mixed with letters): {0}")]
    InvalidIntegerLiteral(EcoString),

    /// A character that belongs to no token class.
    #[error("Invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl LexErrorKind {
    /// Returns the diagnostic code for this lexical error.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            Self::InvalidIntegerLiteral(_) => DiagnosticCode::InvalidIntegerLiteral,
            Self::InvalidCharacter(_) => DiagnosticCode::InvalidCharacter,
        }
    }

    /// Returns the raw source text the error token covers.
    #[must_use]
    pub fn lexeme(&self) -> EcoString {
        match self {
            Self::InvalidIntegerLiteral(text) => text.clone(),
            Self::InvalidCharacter(c) => {
                let mut s = EcoString::new();
                s.push(*c);
                s
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_code_wire_format() {
        assert_eq!(DiagnosticCode::MissingAdditiveOperator.as_str(), "E001");
        assert_eq!(
            DiagnosticCode::MissingMultiplicativeOperator.as_str(),
            "E002"
        );
        assert_eq!(DiagnosticCode::MissingCloseParen.as_str(), "E003");
        assert_eq!(DiagnosticCode::UnexpectedFactorToken.as_str(), "E004");
        assert_eq!(DiagnosticCode::InvalidIntegerLiteral.as_str(), "E005");
        assert_eq!(DiagnosticCode::InvalidCharacter.as_str(), "E006");
        assert_eq!(DiagnosticCode::TrailingInput.as_str(), "E007");
        assert_eq!(DiagnosticCode::TrailingInput.to_string(), "E007");
    }

    #[test]
    fn lex_error_messages() {
        let err = LexErrorKind::InvalidIntegerLiteral("12a3".into());
        assert_eq!(
            err.to_string(),
            "Invalid integer literal (digits mixed with letters): 12a3"
        );
        assert_eq!(err.code(), DiagnosticCode::InvalidIntegerLiteral);
        assert_eq!(err.lexeme(), "12a3");

        let err = LexErrorKind::InvalidCharacter('#');
        assert_eq!(err.to_string(), "Invalid character: '#'");
        assert_eq!(err.code(), DiagnosticCode::InvalidCharacter);
        assert_eq!(err.lexeme(), "#");
    }
}
