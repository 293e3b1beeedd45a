// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Token types for expression-line lexical analysis.
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token
//! - A [`Span`] indicating its location in the line
//!
//! Error tokens carry their diagnostic payload ([`LexErrorKind`]) so the
//! parser can surface lexical problems without consulting the lexer again.

use ecow::EcoString;

use super::{LexErrorKind, Span};

/// The kind of token, not including source location.
///
/// Tokens are designed to be cheap to clone (using [`EcoString`] for
/// string data).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier: `foo`, `my_var`, `_tmp1`
    Identifier(EcoString),

    /// An integer literal: `42`, `007`
    Integer(EcoString),

    /// Additive operator: `+`
    Plus,

    /// Additive operator: `-`
    Minus,

    /// Multiplicative operator: `*`
    Star,

    /// Multiplicative operator: `/`
    Slash,

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// End of input
    Eof,

    /// Invalid token (preserves the diagnostic payload for error recovery)
    Error(LexErrorKind),
}

impl TokenKind {
    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if this token can begin a factor.
    #[must_use]
    pub const fn starts_factor(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::Integer(_) | Self::LeftParen)
    }

    /// Returns `true` if this token is `+` or `-`.
    #[must_use]
    pub const fn is_additive_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Returns `true` if this token is `*` or `/`.
    #[must_use]
    pub const fn is_multiplicative_operator(&self) -> bool {
        matches!(self, Self::Star | Self::Slash)
    }

    /// Returns the string content if this token carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Identifier(s) | Self::Integer(s) => Some(s),
            Self::Error(kind) => match kind {
                LexErrorKind::InvalidIntegerLiteral(s) => Some(s),
                LexErrorKind::InvalidCharacter(_) => None,
            },
            Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::LeftParen
            | Self::RightParen
            | Self::Eof => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(s) | Self::Integer(s) => write!(f, "{s}"),
            Self::Error(kind) => write!(f, "{}", kind.lexeme()),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token with its source location.
///
/// # Examples
///
/// ```
/// use exprline_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier("foo".into()), Span::new(0, 3));
/// assert!(matches!(token.kind(), TokenKind::Identifier(_)));
/// assert_eq!(token.span().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::Identifier("foo".into()).to_string(), "foo");
        assert_eq!(TokenKind::Integer("42".into()).to_string(), "42");
        assert_eq!(TokenKind::Plus.to_string(), "+");
        assert_eq!(TokenKind::Minus.to_string(), "-");
        assert_eq!(TokenKind::Star.to_string(), "*");
        assert_eq!(TokenKind::Slash.to_string(), "/");
        assert_eq!(TokenKind::LeftParen.to_string(), "(");
        assert_eq!(TokenKind::RightParen.to_string(), ")");
        assert_eq!(TokenKind::Eof.to_string(), "<eof>");
        assert_eq!(
            TokenKind::Error(LexErrorKind::InvalidIntegerLiteral("12a3".into())).to_string(),
            "12a3"
        );
        assert_eq!(
            TokenKind::Error(LexErrorKind::InvalidCharacter('#')).to_string(),
            "#"
        );
    }

    #[test]
    fn token_kind_predicates() {
        // starts_factor: identifiers, integers, and `(` open a factor
        assert!(TokenKind::Identifier("x".into()).starts_factor());
        assert!(TokenKind::Integer("1".into()).starts_factor());
        assert!(TokenKind::LeftParen.starts_factor());
        assert!(!TokenKind::RightParen.starts_factor());
        assert!(!TokenKind::Plus.starts_factor());
        assert!(!TokenKind::Eof.starts_factor());
        assert!(!TokenKind::Error(LexErrorKind::InvalidCharacter('#')).starts_factor());

        // operator classes
        assert!(TokenKind::Plus.is_additive_operator());
        assert!(TokenKind::Minus.is_additive_operator());
        assert!(!TokenKind::Star.is_additive_operator());
        assert!(TokenKind::Star.is_multiplicative_operator());
        assert!(TokenKind::Slash.is_multiplicative_operator());
        assert!(!TokenKind::Plus.is_multiplicative_operator());

        // is_eof, is_error
        assert!(TokenKind::Eof.is_eof());
        assert!(!TokenKind::Plus.is_eof());
        assert!(TokenKind::Error(LexErrorKind::InvalidCharacter('?')).is_error());
        assert!(!TokenKind::Identifier("x".into()).is_error());
    }

    #[test]
    fn token_kind_as_str() {
        assert_eq!(TokenKind::Identifier("foo".into()).as_str(), Some("foo"));
        assert_eq!(TokenKind::Integer("42".into()).as_str(), Some("42"));
        assert_eq!(
            TokenKind::Error(LexErrorKind::InvalidIntegerLiteral("1x".into())).as_str(),
            Some("1x")
        );
        assert_eq!(
            TokenKind::Error(LexErrorKind::InvalidCharacter('#')).as_str(),
            None
        );
        assert_eq!(TokenKind::Plus.as_str(), None);
        assert_eq!(TokenKind::Eof.as_str(), None);
    }

    #[test]
    fn token_creation_and_accessors() {
        let token = Token::new(TokenKind::Identifier("foo".into()), Span::new(0, 3));

        assert!(matches!(token.kind(), TokenKind::Identifier(s) if s == "foo"));
        assert_eq!(token.span().start(), 0);
        assert_eq!(token.span().end(), 3);
    }

    #[test]
    fn token_into_kind() {
        let token = Token::new(TokenKind::Integer("42".into()), Span::new(0, 2));
        let kind = token.into_kind();
        assert!(matches!(kind, TokenKind::Integer(s) if s == "42"));
    }
}
