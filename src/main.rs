//! Ember token dump
//!
//! Command-line tool that prints the tokens of an Ember source file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ember_lex::{Diagnostic, Lexer, Token, VERSION};

/// Print the tokens of an Ember source file
#[derive(Parser, Debug)]
#[command(name = "ember-lex")]
#[command(version = VERSION)]
#[command(about = "Print the tokens of an Ember source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.no_color);

    if let Err(message) = show_file_tokens(&cli.file) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

/// Configure logging from `RUST_LOG`, defaulting to warnings only
fn init_logging(no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Keep any subscriber installed by an embedding host.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}

/// Show tokens from lexing a file
fn show_file_tokens(path: &Path) -> Result<(), String> {
    let filename = path.display().to_string();
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let (tokens, error) = Lexer::new(&source)
        .with_filename(filename.as_str())
        .tokenize_partial();

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));
    for (i, token) in tokens.iter().enumerate() {
        println!("{:4}: {}", i, describe(token));
    }
    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    match error {
        Some(err) => Err(Diagnostic::with_source(&err, &source).to_string()),
        None => Ok(()),
    }
}

fn describe(token: &Token) -> String {
    let value = match token.literal {
        Some(ref literal) => format!(" = {}", literal),
        None => String::new(),
    };
    format!(
        "{:20} | {:?}{} @ {}",
        token.kind.to_string(),
        token.lexeme,
        value,
        token.location
    )
}
