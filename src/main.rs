use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use dtoy::{Error, Session, tokenize};
use log::{debug, info};

/// Exit status for malformed input (scan or parse errors).
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for an unreadable script file.
const EXIT_NO_INPUT: u8 = 66;
/// Exit status for runtime errors.
const EXIT_SOFTWARE: u8 = 70;

/// dtoy is a small dynamically-typed scripting language with variables,
/// block scopes and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print the token stream instead of executing.
    #[arg(short, long)]
    tokens: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path, args.tokens),
        None => run_prompt(args.tokens),
    }
}

fn run_file(path: &Path, tokens: bool) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {e}", path.display());
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };
    info!("running {}", path.display());

    if tokens {
        return dump_tokens(&source);
    }

    let mut session = Session::new(io::stdout().lock(), io::stderr());
    match session.run(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_code(&e),
    }
}

fn run_prompt(tokens: bool) -> ExitCode {
    let mut session = Session::new(io::stdout(), io::stderr());
    let mut stdin = io::stdin().lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }

        let input = line.trim();
        match input {
            "exit" | "quit" => break,
            "" => {},
            _ if tokens => {
                dump_tokens(input);
            },
            _ => {
                // Already reported on stderr; the prompt carries on.
                if let Err(e) = session.run(input) {
                    debug!("prompt input failed: {e}");
                }
            },
        }
    }

    ExitCode::SUCCESS
}

fn dump_tokens(source: &str) -> ExitCode {
    match tokenize(source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.report());
            exit_code(&e)
        },
    }
}

fn exit_code(error: &Error) -> ExitCode {
    if error.is_static() {
        ExitCode::from(EXIT_DATA_ERROR)
    } else {
        ExitCode::from(EXIT_SOFTWARE)
    }
}
