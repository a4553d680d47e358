//! Ajist CLI - token dumper and syntax checker for AJIS documents.
//!
//! Reads an AJIS file, lexes it to the end, and prints one line per token.
//! On a lexing failure the first diagnostic is rendered as a caret-annotated
//! report on stderr and the process exits non-zero.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ajis_lex::{Cursor, Lexer, LexerOptions, TokenKind};
use ajis_util::{render, RenderOptions};

/// Ajist - dump the token stream of an AJIS document
#[derive(Parser, Debug)]
#[command(name = "ajist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dumper and syntax checker for AJIS documents", long_about = None)]
struct Cli {
    /// AJIS file to lex
    file: PathBuf,

    /// Allow bare newlines inside string literals
    #[arg(long)]
    multiline_strings: bool,

    /// Allow `_`, `,`, and space as digit-group separators in numbers
    #[arg(long)]
    number_separators: bool,

    /// Colorize diagnostics
    #[arg(long, env = "AJIST_COLOR")]
    color: bool,

    /// Tab width used when aligning the diagnostic caret
    #[arg(long, default_value_t = 4)]
    tab_width: usize,

    /// Suppress the token dump; only report success or failure
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let source = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    tracing::debug!(file = %cli.file.display(), bytes = source.len(), "lexing");

    let options = LexerOptions {
        allow_multiline_strings: cli.multiline_strings,
        allow_number_separators: cli.number_separators,
    };
    let mut lexer = Lexer::new(Cursor::new(&source), options);

    let mut count = 0usize;
    loop {
        match lexer.next_token() {
            Ok(token) => {
                if !cli.quiet {
                    println!(
                        "{} span(offset={}, len={})",
                        token.kind, token.span.offset, token.span.length
                    );
                    if token.kind == TokenKind::String {
                        println!("  raw={:?}", String::from_utf8_lossy(token.text(&source)));
                    }
                }
                if token.is_eof() {
                    break;
                }
                count += 1;
            }
            Err(diag) => {
                let render_opts = RenderOptions {
                    color: cli.color,
                    tab_width: cli.tab_width,
                    ..RenderOptions::default()
                };
                let filename = cli.file.display().to_string();
                render(
                    &mut std::io::stderr(),
                    &filename,
                    &source,
                    &diag,
                    &render_opts,
                )
                .context("failed to render diagnostic")?;
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    tracing::debug!(tokens = count, "lexing finished");
    if cli.quiet {
        println!("ok: {} tokens", count);
    }
    Ok(ExitCode::SUCCESS)
}
