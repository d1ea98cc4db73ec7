//! CLOM CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, resolve, and exit with
//! status 0 on success or help, 1 on any error.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
