use std::fs;

use clap::Parser;
use linescript::{interpreter::dispatcher::DispatchOptions, run_source};

/// linescript is a minimal line-oriented scripting language where every line
/// is either an assignment or a function call.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linescript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Strict mode reports unclassifiable lines and unresolved calls instead
    /// of silently skipping them.
    #[arg(short, long)]
    strict: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let options = DispatchOptions { strict: args.strict,
                                    ..DispatchOptions::default() };

    if let Err(e) = run_source(&script, options) {
        eprintln!("{e}");
    }
}
