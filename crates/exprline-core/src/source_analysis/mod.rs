// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for single-line expressions.
//!
//! This module contains the lexer, the parser, and the diagnostic types.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts one line of source text into a stream of
//! [`Token`]s. Each token carries its source location via [`Span`]. The
//! lexer never fails: malformed runs become [`TokenKind::Error`] tokens
//! that carry their own diagnostic payload.
//!
//! ```
//! use exprline_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1 (EOF excluded from iterator)
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function consumes a token sequence (ending in `Eof`, see
//! [`lex_with_eof`]) and always returns a complete parse tree together with
//! the diagnostics discovered along the way. [`parse_line`] bundles both
//! steps for one line.
//!
//! ```
//! use exprline_core::source_analysis::parse_line;
//!
//! let (tree, diagnostics) = parse_line("a + b * c");
//! assert!(diagnostics.is_empty());
//! # let _ = tree;
//! ```
//!
//! # Error Handling
//!
//! All lexical and syntax problems are soft diagnostics: each carries a
//! stable [`DiagnosticCode`], a message, and a span, and none aborts
//! processing of the line.

mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{DiagnosticCode, LexErrorKind};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::{Diagnostic, parse, parse_line};
pub use span::Span;
pub use token::{Token, TokenKind};
