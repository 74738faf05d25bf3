//! `ridematch` binary entry point.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use ridematch::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(feature = "console")]
    if !cli.quiet {
        ridematch_console::init_with_level(cli.log_level());
    }

    // Results are complete before anything is written, so a failed run
    // prints nothing on stdout.
    let names = match cli.execute() {
        Ok(names) => names,
        Err(err) => {
            eprintln!("ridematch: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for name in &names {
        if writeln!(out, "{}", name).is_err() {
            return ExitCode::FAILURE;
        }
    }
    if out.flush().is_err() {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
