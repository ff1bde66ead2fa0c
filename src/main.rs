use std::fs;

use clap::Parser;
use lisma::evaluate;

/// lisma evaluates a minimal Lisp-flavored arithmetic dialect and prints one
/// result per top-level form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lisma to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&source) {
        Ok(results) => {
            for value in results {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
