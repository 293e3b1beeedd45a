// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Exprline command-line interface.
//!
//! Reads expression lines from a file or standard input until a line
//! equal to `end` (case-insensitive), printing a parse tree for each
//! clean line and a diagnostic report for each malformed one.

use std::fs::File;
use std::io::{self, BufReader};

use camino::Utf8PathBuf;
use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};

use exprline_cli::session::{self, ReportStyle};

/// Exprline: a resilient checker for single-line arithmetic expressions
#[derive(Debug, Parser)]
#[command(name = "exprline")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to read expression lines from (standard input when omitted)
    file: Option<Utf8PathBuf>,

    /// Render diagnostics with source context via miette (on stderr)
    #[arg(long)]
    fancy: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let style = if cli.fancy {
        ReportStyle::Fancy
    } else {
        ReportStyle::Plain
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.file {
        Some(path) => {
            let file = File::open(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open '{path}'"))?;
            session::run(BufReader::new(file), &mut output, style).into_diagnostic()
        }
        None => {
            let stdin = io::stdin();
            session::run(stdin.lock(), &mut output, style).into_diagnostic()
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr so stdout stays
/// reserved for trees and reports.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("exprline_cli=debug,exprline_core=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
