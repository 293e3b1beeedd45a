// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for expression lines.
//!
//! One procedure per grammar rule, with panic-mode recovery embedded in
//! each rule so that a malformed line still produces a complete tree and a
//! full diagnostic report.
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory** — the parser MUST always produce a tree
//! - **Multiple errors** — report all problems, don't stop at the first
//! - **Precise spans** — every diagnostic points to an exact source location
//! - **Forward only** — every recovery path advances the cursor or reaches
//!   end-of-input, so total work is linear in the token count
//!
//! # Grammar
//!
//! ```text
//! expr   := term { ('+' | '-') term }
//! term   := factor { ('*' | '/') factor }
//! factor := IDENT | INT_LITERAL | '(' expr ')'
//! ```
//!
//! # Recovery
//!
//! | Code | Situation | Action |
//! |------|-----------|--------|
//! | E001 | factor follows a term with no `+`/`-` | parse it as an implicit operand |
//! | E002 | factor follows a `*`/`/` chain with no operator | same, one level down |
//! | E003 | `(` never closed | skip to `)` or end of input |
//! | E004 | token cannot start a factor | drop it, skip to an operator or `)` |
//! | E005/E006 | lexical error token | surface its embedded diagnostic |
//! | E007 | tokens left after the top-level expression | report the first |
//!
//! # Usage
//!
//! ```
//! use exprline_core::source_analysis::{lex_with_eof, parse};
//!
//! let tokens = lex_with_eof("a + b * c");
//! let (tree, diagnostics) = parse(tokens);
//!
//! assert!(diagnostics.is_empty());
//! # let _ = tree;
//! ```

use ecow::EcoString;

use crate::ast::{BinaryOp, Chain, Node};

use super::{DiagnosticCode, Span, Token, TokenKind, lex_with_eof};

/// A coded problem report.
///
/// Diagnostics are produced only by the parser, appended to a
/// per-invocation list in discovery order, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The stable code identifying the problem.
    pub code: DiagnosticCode,
    /// The human-readable message.
    pub message: EcoString,
    /// The source location.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(code: DiagnosticCode, message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }
}

/// Parses a token sequence into a tree plus diagnostics.
///
/// This is the main entry point for parsing. The token sequence must end
/// with an `Eof` token (see [`lex_with_eof`]). A tree is always returned,
/// even when the line was malformed; check the diagnostics to decide
/// whether to trust it.
///
/// # Examples
///
/// ```
/// use exprline_core::source_analysis::{lex_with_eof, parse};
///
/// let (tree, diagnostics) = parse(lex_with_eof("x + 1"));
/// assert!(diagnostics.is_empty());
/// # let _ = tree;
/// ```
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Node, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_expression();

    // Anything left over after the top-level expression is trailing input.
    if !parser.is_at_end() {
        let token = parser.current_token().clone();
        parser.diagnostics.push(Diagnostic::new(
            DiagnosticCode::TrailingInput,
            format!(
                "Extra tokens after end of expression (unexpected '{}')",
                token.kind()
            ),
            token.span(),
        ));
    }

    (root, parser.diagnostics)
}

/// Lexes and parses one line.
///
/// Fresh lexer and parser state per call; nothing persists across lines.
#[must_use]
pub fn parse_line(source: &str) -> (Node, Vec<Diagnostic>) {
    parse(lex_with_eof(source))
}

/// The parser state: a cursor over an immutable token sequence plus the
/// diagnostics accumulated so far.
struct Parser {
    /// The tokens being parsed.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    fn current_token(&self) -> &Token {
        if self.current < self.tokens.len() {
            &self.tokens[self.current]
        } else {
            // Past the end of the stream, fall back to the last token (EOF
            // in well-formed input) rather than panicking.
            self.tokens
                .last()
                .expect("Parser has no tokens; expected at least an EOF token")
        }
    }

    /// Returns the current token kind.
    fn current_kind(&self) -> &TokenKind {
        self.current_token().kind()
    }

    /// Checks if we're at the end of input.
    fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token and returns the previous one.
    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.tokens[self.current - 1].clone()
    }

    // ========================================================================
    // Error Handling & Recovery
    // ========================================================================

    /// Skips tokens until the predicate matches or end-of-input is reached.
    ///
    /// The matching token is left for the caller to consume.
    fn skip_until(&mut self, is_sync: impl Fn(&TokenKind) -> bool) {
        while !self.is_at_end() && !is_sync(self.current_kind()) {
            self.advance();
        }
    }

    // ========================================================================
    // Grammar Rules
    // ========================================================================

    /// Parses `expr := term { ('+' | '-') term }`.
    fn parse_expression(&mut self) -> Node {
        let first = self.parse_term();
        let mut rest = Vec::new();

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => break,
            };
            let op_token = self.advance();
            let operand = self.parse_term();
            let span = op_token.span().merge(operand.span());
            rest.push(Node::Operand {
                op,
                operand: Box::new(operand),
                span,
            });
        }

        // A factor-starting token directly after a term means the additive
        // operator was dropped; parse the operand anyway and keep going.
        while self.current_kind().starts_factor() {
            let token = self.current_token().clone();
            self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::MissingAdditiveOperator,
                format!("Missing '+' or '-' between terms before '{}'", token.kind()),
                token.span(),
            ));
            rest.push(self.parse_term());
        }

        let span = rest
            .last()
            .map_or_else(|| first.span(), |last| first.span().merge(last.span()));
        Node::Expression(Chain {
            first: Box::new(first),
            rest,
            span,
        })
    }

    /// Parses `term := factor { ('*' | '/') factor }`.
    fn parse_term(&mut self) -> Node {
        let first = self.parse_factor();
        let mut rest = Vec::new();

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Slash => BinaryOp::Divide,
                _ => break,
            };
            let op_token = self.advance();
            let operand = self.parse_factor();
            let span = op_token.span().merge(operand.span());
            rest.push(Node::Operand {
                op,
                operand: Box::new(operand),
                span,
            });
        }

        // Missing '*'/'/' between factors. Only claim a dangling factor
        // when this term already is a multiplicative chain; after a bare
        // term the factor belongs to the enclosing expression's
        // missing-operator recovery.
        if !rest.is_empty() {
            while self.current_kind().starts_factor() {
                let token = self.current_token().clone();
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::MissingMultiplicativeOperator,
                    format!(
                        "Missing '*' or '/' between factors before '{}'",
                        token.kind()
                    ),
                    token.span(),
                ));
                rest.push(self.parse_factor());
            }
        }

        let span = rest
            .last()
            .map_or_else(|| first.span(), |last| first.span().merge(last.span()));
        Node::Term(Chain {
            first: Box::new(first),
            rest,
            span,
        })
    }

    /// Parses `factor := IDENT | INT_LITERAL | '(' expr ')'`.
    fn parse_factor(&mut self) -> Node {
        let token = self.current_token().clone();
        match token.kind() {
            // A lexical error token: surface its embedded diagnostic.
            TokenKind::Error(kind) => {
                self.diagnostics
                    .push(Diagnostic::new(kind.code(), kind.to_string(), token.span()));
                self.advance();
                Node::ErrorToken { span: token.span() }
            }

            TokenKind::Identifier(name) => {
                self.advance();
                Node::Identifier {
                    name: name.clone(),
                    span: token.span(),
                }
            }

            TokenKind::Integer(literal) => {
                self.advance();
                Node::Integer {
                    literal: literal.clone(),
                    span: token.span(),
                }
            }

            TokenKind::LeftParen => self.parse_parenthesized(),

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::RightParen
            | TokenKind::Eof => {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnexpectedFactorToken,
                    format!(
                        "Expected identifier, integer literal, or '(' but found '{}'",
                        token.kind()
                    ),
                    token.span(),
                ));
                // Panic mode: drop the offending token, then skip to a
                // synchronizing token.
                if !self.is_at_end() {
                    self.advance();
                }
                self.skip_until(|kind| {
                    kind.is_additive_operator()
                        || kind.is_multiplicative_operator()
                        || matches!(kind, TokenKind::RightParen)
                });
                Node::ErrorFactor { span: token.span() }
            }
        }
    }

    /// Parses a `'(' expr ')'` factor, recovering when the `)` is missing.
    fn parse_parenthesized(&mut self) -> Node {
        let open = self.advance();
        let inner = self.parse_expression();

        let close = if matches!(self.current_kind(), TokenKind::RightParen) {
            Some(self.advance())
        } else {
            // Reported at the opening paren, which is where the fix goes.
            self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::MissingCloseParen,
                "Missing ')' to match '('",
                open.span(),
            ));
            self.skip_until(|kind| matches!(kind, TokenKind::RightParen));
            if matches!(self.current_kind(), TokenKind::RightParen) {
                Some(self.advance())
            } else {
                None
            }
        };

        let end_span = close.map_or_else(|| inner.span(), |token| token.span());
        Node::Parenthesized {
            inner: Box::new(inner),
            span: open.span().merge(end_span),
        }
    }
}
