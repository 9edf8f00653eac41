//! Randomkit command line tool
//!
//! Dumps draws from a seeded engine as JSON, for cross-checking against
//! numpy or other implementations. Set `RUST_LOG=debug` for engine logs.

mod draw;
mod error;
mod request;

use error::CliError;
use request::{Overrides, USAGE};
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> Result<(), CliError> {
    let overrides = Overrides::parse(std::env::args_os())?;
    if overrides.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let request = overrides.resolve()?;
    let output = draw::execute(&request)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &output)?;
    writeln!(handle)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
