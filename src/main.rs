use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use indent_lexer::{render_error, tokenize, LexerOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokenize a source file and print the token stream.
#[derive(Parser, Debug)]
#[command(name = "indent-lexer", version)]
struct Args {
    /// Source file to tokenize
    file: PathBuf,

    /// Print leading and trailing trivia counts for each token
    #[arg(long)]
    trivia: bool,

    /// Do not warn about indentation that is ignored
    #[arg(long)]
    allow_ambiguous_indentation: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let source = read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let start = Instant::now();
    let lexed = tokenize(
        &source,
        LexerOptions {
            report_ambiguous_indentation: !args.allow_ambiguous_indentation,
        },
    );
    info!(elapsed = ?start.elapsed(), tokens = lexed.tokens.len(), "tokenized");

    for token in &lexed.tokens {
        if args.trivia {
            println!(
                "{} (leading {}, trailing {})",
                token,
                token.leading_trivia(),
                token.trailing_trivia()
            );
        } else {
            println!("{}", token);
        }
    }

    let file_name = args.file.display().to_string();
    for error in &lexed.errors {
        eprintln!("{}\n", render_error(error, &source, &file_name));
    }

    Ok(if lexed.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
