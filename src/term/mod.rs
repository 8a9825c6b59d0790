extern crate ansi_term;
extern crate linefeed;
use crate::lang::{parse, Error};
use crate::mach::{Runtime, Tokens};
use crate::error;
use ansi_term::Style;
use std::io::{self, ErrorKind, IsTerminal, Write};
use std::sync::Once;

mod console;

#[cfg(test)]
mod tests;

pub use console::Console;

const USAGE: &str = "usage: recdef [--list] <program-file>";

static TRACING_INIT: Once = Once::new();

pub fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.as_slice() {
        [path] if !path.starts_with('-') => run_file(path),
        [flag, path] if flag == "--list" => list_file(path),
        _ => {
            eprintln!("{}", USAGE);
            2
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr and only when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

fn run_file(path: &str) -> i32 {
    let source = match load(path) {
        Ok(source) => source,
        Err(error) => return report(&error),
    };
    let mut output = io::stdout();
    let mut runtime = Runtime::default();
    let result = if io::stdin().is_terminal() {
        match Console::new() {
            Ok(mut console) => runtime.run_styled(&source, &mut console, &mut output, error_style()),
            Err(error) => return report(&error.into()),
        }
    } else {
        let mut input = Tokens::new(io::stdin().lock());
        runtime.run_styled(&source, &mut input, &mut output, error_style())
    };
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn list_file(path: &str) -> i32 {
    let program = match load(path).and_then(|source| parse(&source)) {
        Ok(program) => program,
        Err(error) => return report(&error),
    };
    let mut output = io::stdout().lock();
    for statement in &program {
        if let Err(error) = writeln!(output, "{}", statement) {
            return report(&error.into());
        }
    }
    0
}

/// Diagnostics are bold when stdout is a terminal.
fn error_style() -> Style {
    if io::stdout().is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    }
}

/// Writes the diagnostic line for an error raised outside a run and
/// returns the failure exit code.
fn report(error: &Error) -> i32 {
    println!("{}", error_style().paint(format!("?{}", error)));
    1
}

fn load(filename: &str) -> Result<String, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; filename)),
            _ => Err(error.into()),
        },
    }
}
