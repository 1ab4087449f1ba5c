mod app;
mod args;
mod config;
mod entry;
mod error;
mod logger;
mod tags;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
