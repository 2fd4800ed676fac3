//! `bigcalc`: evaluates integer expressions of any size.
//!
//! With expressions on the command line each one is evaluated and printed. Without any,
//! lines are read from standard input: `NAME = EXPR` assigns a session variable, any other
//! line is evaluated, and `quit` ends the session.

use std::collections::HashMap;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use bigint_calc::{evaluate_with, BigInteger, ExprError};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

/// Arbitrary-precision integer calculator
#[derive(Parser, Debug)]
#[command(name = "bigcalc")]
#[command(about = "Arbitrary-precision integer calculator supporting +, - and *")]
struct CalcArgs {
    /// Expressions to evaluate; reads expressions from stdin when none are given
    exprs: Vec<String>,

    /// Bind a variable before evaluating (e.g. "x=12*34"); may be repeated
    #[arg(long = "var", value_name = "NAME=EXPR")]
    vars: Vec<String>,

    /// Log evaluation steps to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

type Session = HashMap<String, BigInteger>;

/// Splits `NAME = EXPR`, returning `None` when the left side is not a variable name.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once('=')?;
    let name = name.trim();
    let mut chars = name.chars();
    let head = chars.next()?;
    let is_name = (head.is_ascii_alphabetic() || head == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_name { Some((name, value)) } else { None }
}

fn bind_vars(bindings: &[String]) -> Result<Session, ExprError> {
    let mut session = Session::new();
    for binding in bindings {
        let (name, value) = split_assignment(binding)
            .ok_or_else(|| ExprError::InvalidBinding(binding.clone()))?;
        let value = evaluate_with(value, &session)?;
        session.insert(name.to_string(), value);
    }
    Ok(session)
}

fn run_repl(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" | "exit" => break,
            _ => {},
        }
        match split_assignment(input) {
            Some((name, value)) => match evaluate_with(value, &session) {
                Ok(value) => {
                    writeln!(stdout, "{} = {}", name, value)?;
                    session.insert(name.to_string(), value);
                },
                Err(e) => eprintln!("error: {}", e),
            },
            None => match evaluate_with(input, &session) {
                Ok(value) => writeln!(stdout, "{}", value)?,
                Err(e) => eprintln!("error: {}", e),
            },
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CalcArgs::parse();
    init_logging(args.verbose);

    let session = match bind_vars(&args.vars) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if args.exprs.is_empty() {
        return match run_repl(session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            },
        };
    }

    let mut status = ExitCode::SUCCESS;
    for origin in &args.exprs {
        match evaluate_with(origin, &session) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("error: {}", e);
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}

#[test]
fn test_split_assignment() {
    assert_eq!(split_assignment("x = 1 + 2"), Some(("x", " 1 + 2")));
    assert_eq!(split_assignment("_tmp2=7"), Some(("_tmp2", "7")));
    assert_eq!(split_assignment("2x = 1"), None);
    assert_eq!(split_assignment("1 + 2"), None);
    assert_eq!(split_assignment(" = 4"), None);
}

#[test]
fn test_bind_vars() {
    let specs = vec!["a=10".to_string(), "b = a * a - 1".to_string()];
    let session = bind_vars(&specs).unwrap();
    assert_eq!(session["b"].to_string(), "99");
    assert_eq!(bind_vars(&["nope".to_string()]).unwrap_err(), ExprError::InvalidBinding("nope".to_string()));
}
