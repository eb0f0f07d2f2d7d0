use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use clap::Parser;
use parser::ParseError;
use scanner::Scanner;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Reverse Polish notation, e.g. `1 2 + 3 *`
    Rpn,
    /// Parenthesized prefix form, e.g. `(* (group (+ 1 2)) 3)`
    Ast,
}

/// Parses Lox expressions and prints them in another notation.
#[derive(clap::Parser)]
struct Args {
    /// File containing a single expression. Starts a prompt if omitted.
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Rpn)]
    format: Format,
}

/// Exit code for malformed input, as in sysexits.h.
const EX_DATAERR: i32 = 65;

fn run_file(path: PathBuf, format: Format) -> anyhow::Result<()> {
    log::debug!("Running {:?} as {:?}", path, format);
    let had_error = run(&std::fs::read_to_string(path)?, format, &mut stdout())?;
    if had_error {
        std::process::exit(EX_DATAERR);
    }
    Ok(())
}

fn run_prompt(format: Format) -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        run(&line, format, &mut stdout())?;
    }
}

/// Prints the rendering of `source` to `output` and all diagnostics to
/// stderr. Returns whether any diagnostic was reported.
fn run(source: &str, format: Format, output: &mut impl Write) -> anyhow::Result<bool> {
    let tokens = match Scanner::new(source).scan_tokens() {
        Ok(tokens) => tokens,
        Err(errors) => {
            eprintln!("{errors}");
            return Ok(true);
        }
    };

    let mut had_error = false;
    let expr = parser::parse(&tokens, &mut |error: &ParseError| {
        eprintln!("{error}");
        had_error = true;
    });

    if let Some(expr) = expr {
        match format {
            Format::Rpn => writeln!(output, "{}", printer::rpn(&expr))?,
            Format::Ast => writeln!(output, "{expr}")?,
        }
    }

    Ok(had_error)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file, args.format),
        None => run_prompt(args.format),
    }
}
