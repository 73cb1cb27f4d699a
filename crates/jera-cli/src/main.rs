mod output;

use clap::{Parser, Subcommand};
use jera_lexer::{Diagnostics, Token};
use output::ColorMode;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Once;

/// Source file read when no path is given.
const DEFAULT_SOURCE: &str = "test.jera";

static TRACING_INIT: Once = Once::new();

#[derive(Parser)]
#[command(name = "jera")]
#[command(about = "Jera language toolchain")]
#[command(version)]
struct Cli {
    /// When to color diagnostic labels
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Print tokens and diagnostics as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a .jera file and dump every token
    Tokens {
        /// Input .jera file
        #[arg(default_value = DEFAULT_SOURCE)]
        path: String,
    },

    /// Check a .jera file for lexical errors without dumping tokens
    Check {
        /// Input .jera file
        #[arg(default_value = DEFAULT_SOURCE)]
        path: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let colors = cli.color.should_use_colors(std::io::stderr().is_terminal());

    match cli.command {
        Command::Tokens { path } => cmd_tokens(&path, cli.json, colors),
        Command::Check { path } => cmd_check(&path, cli.json, colors),
    }
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=jera_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => {
            tracing::debug!(path, bytes = source.len(), "read source");
            source
        }
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn lex<'src>(source: &'src str, json: bool, colors: bool) -> Vec<Token<'src>> {
    match jera_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(diagnostics) => {
            report_diagnostics(&diagnostics, json, colors);
            std::process::exit(output::exit_status(&diagnostics));
        }
    }
}

fn report_diagnostics(diagnostics: &Diagnostics, json: bool, colors: bool) {
    if json {
        match output::diagnostics_json(diagnostics) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error serializing diagnostics: {e}"),
        }
    } else {
        eprint!("{}", output::render_diagnostics(diagnostics, colors));
    }
}

fn cmd_tokens(path: &str, json: bool, colors: bool) {
    let source = read_source(path);
    let tokens = lex(&source, json, colors);

    if json {
        match output::tokens_json(&tokens) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing tokens: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", output::render_tokens(&tokens));
    }
}

fn cmd_check(path: &str, json: bool, colors: bool) {
    let source = read_source(path);
    let tokens = lex(&source, json, colors);

    tracing::debug!(tokens = tokens.len(), "lexing succeeded");
    eprintln!("OK: {path}");
}
