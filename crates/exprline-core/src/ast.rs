// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Parse tree definitions for expression lines.
//!
//! The tree mirrors the grammar: an expression is a chain of terms joined
//! by additive operators, a term is a chain of factors joined by
//! multiplicative operators, and a factor is a leaf or a parenthesized
//! expression. Every node carries a [`Span`] for error reporting.
//!
//! # Design Philosophy
//!
//! - **Always complete** — the parser returns a well-formed tree even when
//!   recovery ran; error placeholders ([`Node::ErrorToken`],
//!   [`Node::ErrorFactor`]) stand in for unparseable input
//! - **Chains, not nests** — a left-associative run like `a + b - c` is one
//!   [`Chain`] with operator-tagged operands, preserving the grouping
//!   without building a right-skewed tree
//!
//! # Example
//!
//! ```ignore
//! // Source: a + b
//! Node::Expression(Chain {
//!     first: Node::Term(Chain { first: Node::Identifier { name: "a", .. }, .. }),
//!     rest: vec![Node::Operand {
//!         op: BinaryOp::Add,
//!         operand: Node::Term(Chain { first: Node::Identifier { name: "b", .. }, .. }),
//!         ..
//!     }],
//!     ..
//! })
//! ```

use std::fmt::Write;

use ecow::EcoString;

use crate::source_analysis::Span;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl BinaryOp {
    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An operator chain: the first operand followed by the rest.
///
/// `rest` normally holds [`Node::Operand`] entries. Missing-operator
/// recovery appends the bare operand subtree instead, so both `a + b` and
/// the malformed `a b` keep all their operands in one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// The first (tighter-precedence) subtree.
    pub first: Box<Node>,
    /// Operator-tagged operands, plus any implicit operands from recovery.
    pub rest: Vec<Node>,
    /// Source location of the whole chain.
    pub span: Span,
}

/// A parse tree node.
///
/// One constructor per node kind, each carrying exactly its fields; the
/// parser owns the whole tree until it is handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An additive chain of terms.
    Expression(Chain),

    /// A multiplicative chain of factors.
    Term(Chain),

    /// An operator-tagged right-hand operand inside a chain.
    Operand {
        /// The operator joining this operand to the chain.
        op: BinaryOp,
        /// The right-hand operand subtree.
        operand: Box<Node>,
        /// Source location from the operator through the operand.
        span: Span,
    },

    /// An identifier factor.
    Identifier {
        /// The identifier's name.
        name: EcoString,
        /// Source location of the identifier.
        span: Span,
    },

    /// An integer-literal factor.
    Integer {
        /// The literal's source text.
        literal: EcoString,
        /// Source location of the literal.
        span: Span,
    },

    /// A parenthesized expression factor.
    Parenthesized {
        /// The inner expression.
        inner: Box<Node>,
        /// Source location from `(` through `)` (or to the recovery point
        /// when the `)` was missing).
        span: Span,
    },

    /// Placeholder for a lexical error token consumed in factor position.
    ErrorToken {
        /// Source location of the error token.
        span: Span,
    },

    /// Placeholder produced when no factor could be parsed.
    ErrorFactor {
        /// Source location of the offending token.
        span: Span,
    },
}

impl Node {
    /// Returns the source location of this node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Expression(chain) | Self::Term(chain) => chain.span,
            Self::Operand { span, .. }
            | Self::Identifier { span, .. }
            | Self::Integer { span, .. }
            | Self::Parenthesized { span, .. }
            | Self::ErrorToken { span }
            | Self::ErrorFactor { span } => *span,
        }
    }

    /// Renders the tree in pre-order, one label per line, indented two
    /// spaces per depth level.
    ///
    /// # Examples
    ///
    /// ```
    /// use exprline_core::source_analysis::parse_line;
    ///
    /// let (tree, diagnostics) = parse_line("a");
    /// assert!(diagnostics.is_empty());
    /// assert_eq!(tree.pretty(), "EXPR\n  TERM\n    IDENT(a)\n");
    /// ```
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Self::Expression(chain) => {
                out.push_str("EXPR\n");
                chain.first.write_pretty(out, depth + 1);
                for node in &chain.rest {
                    node.write_pretty(out, depth + 1);
                }
            }
            Self::Term(chain) => {
                out.push_str("TERM\n");
                chain.first.write_pretty(out, depth + 1);
                for node in &chain.rest {
                    node.write_pretty(out, depth + 1);
                }
            }
            Self::Operand { op, operand, .. } => {
                let _ = writeln!(out, "BINOP {op}");
                operand.write_pretty(out, depth + 1);
            }
            Self::Identifier { name, .. } => {
                let _ = writeln!(out, "IDENT({name})");
            }
            Self::Integer { literal, .. } => {
                let _ = writeln!(out, "INT({literal})");
            }
            Self::Parenthesized { inner, .. } => {
                out.push_str("PAREN_EXPR\n");
                inner.write_pretty(out, depth + 1);
            }
            Self::ErrorToken { .. } => {
                out.push_str("ERROR_TOKEN\n");
            }
            Self::ErrorFactor { .. } => {
                out.push_str("ERROR_FACTOR\n");
            }
        }
    }
}
