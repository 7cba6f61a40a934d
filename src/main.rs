//! Reads mission lines from a file (or stdin) and prints one result per line.
//!
//! ```text
//! plateau-rover [--halt-on-error] [INPUT]
//! ```
//!
//! Logging is controlled through `RUST_LOG`.

use log::debug;
use plateau_rover::{Session, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut config = SessionConfig::default();
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--halt-on-error" {
            config.halt_on_error = true;
        } else if arg == "-h" || arg == "--help" {
            println!("usage: plateau-rover [--halt-on-error] [INPUT]");
            return ExitCode::SUCCESS;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("error: unexpected argument {arg:?}");
            return ExitCode::from(2);
        }
    }

    let mut session = Session::new(config);
    let reports = match &path {
        Some(p) => match File::open(p) {
            Ok(file) => session.run(BufReader::new(file)),
            Err(err) => {
                eprintln!("error: cannot open {p}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => session.run(io::stdin().lock()),
    };

    let reports = match reports {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for report in &reports {
        match &report.result {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => {
                failed = true;
                eprintln!("error: line {}: {err}", report.line_number);
            }
        }
    }

    let halted = failed && session.config().halt_on_error;
    for rover in session.into_control().rovers() {
        debug!("final: {}", rover.report_status());
    }

    if halted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
