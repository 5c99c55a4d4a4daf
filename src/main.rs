use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use postmatch::Regex;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expression to match against, e.g. "a.(b|d).c*"
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Strings to test; read one per line from stdin when none are given
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// PATTERN is already in postfix form
    #[arg(short = 'p', long)]
    postfix: bool,

    /// Print the postfix form of PATTERN
    #[arg(short = 's', long)]
    show_postfix: bool,

    /// Print the compiled automaton
    #[arg(short = 'd', long)]
    dump_nfa: bool,
}

const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let status = execute(
        args,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

/// Run the command and map the outcome to an exit status.
fn execute(args: Args, stdin: impl BufRead, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run(args, stdin, out) {
        Ok(true) => 0,
        Ok(false) => EXIT_NO_MATCH,
        Err(e) => {
            // Nothing sensible to do if stderr itself is gone.
            let _ = writeln!(err, "Error: {e:#}");
            EXIT_ERROR
        }
    }
}

/// Returns whether every input matched.
fn run(args: Args, stdin: impl BufRead, out: &mut impl Write) -> Result<bool> {
    let pattern = &args.pattern;
    let regex = if args.postfix {
        Regex::from_postfix(pattern).with_context(|| format!("Invalid postfix {pattern:?}"))?
    } else {
        Regex::new(pattern).with_context(|| format!("Invalid pattern {pattern:?}"))?
    };

    if args.show_postfix {
        writeln!(out, "Postfix: {}", regex.as_postfix())?;
    }
    if args.dump_nfa {
        write!(out, "{}", regex.nfa())?;
    }

    let inputs = if args.inputs.is_empty() {
        stdin
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        args.inputs
    };

    let mut all_matched = true;
    for input in &inputs {
        let matched = regex.is_match(input);
        all_matched &= matched;
        writeln!(out, "{input}: {}", if matched { "match" } else { "no match" })?;
    }
    Ok(all_matched)
}
