use std::fs;

use clap::Parser;
use reckon::{
    config::{Config, LogConfig, Mode},
    logger, run,
};
use tracing::Level;

/// reckon is a small calculator language with integer arithmetic, functions,
/// conditionals and an optional integer/float type system.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Runs with integer/float type inference instead of plain integers.
    #[arg(short, long)]
    typed: bool,

    /// Pipe mode automatically prints out the value of the last statement of
    /// a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the syntax tree before running the script.
    #[arg(long)]
    dump_ast: bool,

    /// Log level written to standard error (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: Level,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let config = Config { mode: if args.typed { Mode::Typed } else { Mode::Integer },
                          log: LogConfig { global: args.log_level,
                                           ..Default::default() },
                          auto_print: args.pipe_mode,
                          dump_ast: args.dump_ast,
                          ..Default::default() };
    logger::init(&config.log);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script, &config) {
        eprintln!("{}: {e}", e.kind());
        std::process::exit(1);
    }
}
