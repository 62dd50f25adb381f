use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use russet::{Outcome, parse_program, run_file, tokenize};
use tracing_subscriber::EnvFilter;

/// russet is a small scripting language with declared types.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program file to run.
    file: PathBuf,

    /// Prints the tokens of the file, one per line, instead of running it.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the syntax tree of each top-level statement instead of running
    /// the file.
    #[arg(short, long)]
    ast: bool,

    /// Compiles the file. Not available yet.
    #[arg(short, long)]
    compile: bool,

    /// Logs interpreter internals to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.compile {
        eprintln!("error: compilation is not implemented");
        return ExitCode::from(2);
    }

    if args.tokens || args.ast {
        return inspect(&args);
    }

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = run_file(&args.file, &mut output);

    if let Err(e) = output.flush() {
        eprintln!("Failed to flush program output: {e}");
    }

    match result {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Exited(code)) => {
            ExitCode::from(u8::try_from(code.rem_euclid(256)).unwrap_or(u8::MAX))
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Handles `--tokens` and `--ast`.
fn inspect(args: &Args) -> ExitCode {
    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not read {}: {e}", args.file.display());
            return ExitCode::FAILURE;
        },
    };

    if args.tokens {
        match tokenize(&source) {
            Ok(tokens) => {
                for spanned in tokens {
                    println!("{}:{}  {:?}  '{}'",
                             spanned.position.line,
                             spanned.position.column,
                             spanned.token,
                             spanned.lexeme);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    if args.ast {
        match parse_program(&source) {
            Ok(program) => program.iter().for_each(|statement| println!("{statement}")),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
