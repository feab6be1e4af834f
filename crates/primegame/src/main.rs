//! CLI entry point for the PRIMEGAME demonstration binary.

use std::env;
use std::ffi::OsString;

use fractran_core as _;
use num_bigint as _;
use primegame::{PrimeStream, StderrTrace};

const USAGE_TEXT: &str = "\
Usage: primegame [options] [count]

Prints the first `count` primes PRIMEGAME emits, one per line
(default: 10).

Options:
  -t, --trace   Print every engine phase to stderr, plus the program table
  -h, --help    Show this help message

Examples:
  primegame
  primegame 25
  primegame --trace 3
";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    count: u64,
    trace: bool,
}

#[derive(Debug)]
enum ParseResult {
    Run(Args),
    Help,
}

fn parse_args(args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut count: Option<u64> = None;
    let mut trace = false;

    for arg in args {
        match arg.to_string_lossy().as_ref() {
            "-h" | "--help" => return Ok(ParseResult::Help),
            "-t" | "--trace" => trace = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            other => {
                if count.is_some() {
                    return Err(format!("unexpected argument: {other}"));
                }
                let parsed = other
                    .parse::<u64>()
                    .map_err(|_| format!("count must be a non-negative integer, got: {other}"))?;
                count = Some(parsed);
            }
        }
    }

    Ok(ParseResult::Run(Args {
        count: count.unwrap_or(10),
        trace,
    }))
}

fn run(args: &Args) {
    let mut stream = PrimeStream::new();

    if args.trace {
        for (index, fraction) in stream.engine().program().iter().enumerate() {
            eprintln!("{index}: {fraction}");
        }
    }

    let mut sink = StderrTrace;
    for _ in 0..args.count {
        let prime = if args.trace {
            stream.next_traced(&mut sink)
        } else {
            stream.next()
        };

        // PRIMEGAME never halts, so the stream never runs dry.
        let Some(prime) = prime else { break };
        println!("{prime}");
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(args)) => {
            run(&args);
            0
        }
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}
