// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for expression lines.
//!
//! This module converts one line of source text into a stream of
//! [`Token`]s. The lexer is hand-written for maximum control over error
//! recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never fail on malformed input; emit
//!   [`TokenKind::Error`] tokens that carry their diagnostic payload
//! - **Maximal munch**: a digit-initial run is consumed to its end even
//!   when letters poison it — the whole run becomes one error token
//! - **Precise spans**: every token carries its exact source location
//!
//! # Example
//!
//! ```
//! use exprline_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1 (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{LexErrorKind, Span, Token, TokenKind};

/// A lexer that tokenizes one line of expression source.
///
/// Whitespace is skipped and never tokenized. The lexer implements
/// [`Iterator`] for easy consumption; the iterator stops before the
/// end-of-input token (use [`lex_with_eof`] when the terminator matters).
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given line.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "input lines over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Lexes the next token.
    fn lex_token(&mut self) -> Token {
        self.advance_while(char::is_whitespace);

        let start = self.current_position();
        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c, start),
        };

        Token::new(kind, self.span_from(start))
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> TokenKind {
        match c {
            'a'..='z' | 'A'..='Z' | '_' => self.lex_identifier(),

            '0'..='9' => self.lex_number(start),

            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '-' => {
                self.advance();
                TokenKind::Minus
            }
            '*' => {
                self.advance();
                TokenKind::Star
            }
            '/' => {
                self.advance();
                TokenKind::Slash
            }
            '(' => {
                self.advance();
                TokenKind::LeftParen
            }
            ')' => {
                self.advance();
                TokenKind::RightParen
            }

            // Unknown character - error recovery
            _ => {
                self.advance();
                TokenKind::Error(LexErrorKind::InvalidCharacter(c))
            }
        }
    }

    /// Lexes an identifier.
    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let text = self.text_for(self.span_from(start));
        TokenKind::Identifier(EcoString::from(text))
    }

    /// Lexes an integer literal run.
    ///
    /// Maximal munch: a letter or underscore inside the run is consumed
    /// along with everything after it, and the whole run becomes a single
    /// error token rather than a valid prefix plus a trailing error.
    fn lex_number(&mut self, start: u32) -> TokenKind {
        let mut invalid = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c.is_ascii_alphabetic() || c == '_' {
                self.advance();
                invalid = true;
            } else {
                break;
            }
        }

        let text = self.text_for(self.span_from(start));
        if invalid {
            TokenKind::Error(LexErrorKind::InvalidIntegerLiteral(EcoString::from(text)))
        } else {
            TokenKind::Integer(EcoString::from(text))
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lex_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex a line into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex a line into a vector of tokens including EOF.
///
/// The result always ends with exactly one [`TokenKind::Eof`] token whose
/// span sits at the end of the line.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.lex_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(Token::into_kind).collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());

        let tokens = lex_with_eof("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_eof());
        assert_eq!(tokens[0].span(), Span::new(0, 0));
    }

    #[test]
    fn lex_identifiers() {
        assert_eq!(
            lex_kinds("foo _bar x1 a_b"),
            vec![
                TokenKind::Identifier("foo".into()),
                TokenKind::Identifier("_bar".into()),
                TokenKind::Identifier("x1".into()),
                TokenKind::Identifier("a_b".into()),
            ]
        );
    }

    #[test]
    fn lex_integers() {
        assert_eq!(
            lex_kinds("42 007"),
            vec![
                TokenKind::Integer("42".into()),
                TokenKind::Integer("007".into()),
            ]
        );
    }

    #[test]
    fn lex_operators_and_parens() {
        assert_eq!(
            lex_kinds("+ - * / ( )"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::LeftParen,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn lex_expression_spans() {
        let tokens = lex("a + 12");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].span(), Span::new(0, 1));
        assert_eq!(tokens[1].span(), Span::new(2, 3));
        assert_eq!(tokens[2].span(), Span::new(4, 6));
    }

    #[test]
    fn lex_invalid_integer_is_one_token() {
        // Maximal munch: the run is never split into "12" + "a3".
        let tokens = lex("12a3");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind(),
            &TokenKind::Error(LexErrorKind::InvalidIntegerLiteral("12a3".into()))
        );
        assert_eq!(tokens[0].span(), Span::new(0, 4));
    }

    #[test]
    fn lex_invalid_integer_with_underscore() {
        assert_eq!(
            lex_kinds("4in_t"),
            vec![TokenKind::Error(LexErrorKind::InvalidIntegerLiteral(
                "4in_t".into()
            ))]
        );
    }

    #[test]
    fn lex_invalid_integer_stops_at_operator() {
        // The poisoned run ends where the character class ends.
        assert_eq!(
            lex_kinds("12a3+x"),
            vec![
                TokenKind::Error(LexErrorKind::InvalidIntegerLiteral("12a3".into())),
                TokenKind::Plus,
                TokenKind::Identifier("x".into()),
            ]
        );
    }

    #[test]
    fn lex_invalid_character() {
        let tokens = lex("#");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind(),
            &TokenKind::Error(LexErrorKind::InvalidCharacter('#'))
        );
        assert_eq!(tokens[0].span(), Span::new(0, 1));
    }

    #[test]
    fn lex_skips_whitespace() {
        let tokens = lex_with_eof("  a\t+ b  ");
        let kinds: Vec<_> = tokens.iter().map(Token::kind).cloned().collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Plus,
                TokenKind::Identifier("b".into()),
                TokenKind::Eof,
            ]
        );
        // EOF sits at the very end of the line, past trailing whitespace.
        assert_eq!(tokens[3].span(), Span::new(9, 9));
    }

    #[test]
    fn lex_with_eof_exactly_one_terminator() {
        let tokens = lex_with_eof("a + b");
        let eof_count = tokens.iter().filter(|t| t.kind().is_eof()).count();
        assert_eq!(eof_count, 1);
        assert!(tokens.last().is_some_and(|t| t.kind().is_eof()));
        assert_eq!(tokens.last().map(|t| t.span()), Some(Span::new(5, 5)));
    }

    #[test]
    fn lex_offsets_non_decreasing() {
        let tokens = lex_with_eof("(a1 + 23) * _x / 9 - end");
        let mut previous = 0;
        for token in &tokens {
            assert!(token.span().start() >= previous);
            previous = token.span().start();
        }
    }

    #[test]
    fn lex_mixed_errors() {
        assert_eq!(
            lex_kinds("a ? 1b"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Error(LexErrorKind::InvalidCharacter('?')),
                TokenKind::Error(LexErrorKind::InvalidIntegerLiteral("1b".into())),
            ]
        );
    }
}
