use std::{io, path::PathBuf, process};

use clap::Parser;
use sprout::{
    error::{Diagnostic, ParseError},
    interpreter::{
        lexer::{Source, tokenize},
        stdlib,
    },
    run_source,
};

/// sprout runs small, dynamically scoped scripts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the token stream before running the script.
    #[arg(short, long)]
    tokens: bool,

    /// The script to run. Standard input is read when omitted.
    path: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.path {
        Some(path) => Source::from_path(path),
        None => Source::from_reader(io::stdin()),
    };
    let source = source.unwrap_or_else(|e| {
                           let name = args.path
                                          .as_ref()
                                          .map_or_else(|| "standard input".to_string(),
                                                       |path| path.display().to_string());
                           eprintln!("Failed to read '{name}': {e}");
                           process::exit(1);
                       });

    if args.tokens {
        print_tokens(&source);
    }

    if let Err(e) = run_source(&source, stdlib::stdout()) {
        match e.downcast_ref::<ParseError>() {
            Some(error) => eprint!("{}", Diagnostic::from_parse_error(error, Some(&source.text))),
            None => eprintln!("{e}"),
        }
        process::exit(1);
    }
}

/// Prints one `line:column type "text"` row per token.
fn print_tokens(source: &Source) {
    match tokenize(source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:>4}:{:<4} {:<16} {:?}",
                         token.location.line,
                         token.location.column,
                         token.ty.name(),
                         token.text);
            }
        },
        Err(error) => eprint!("{}", Diagnostic::from_parse_error(&error, Some(&source.text))),
    }
}
