mod cli;
mod config;
mod detect_cmd;
mod extract_cmd;
mod inject_cmd;
mod logging;
mod remove_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Detect(args) => detect_cmd::run(args),
        Command::Remove(args) => remove_cmd::run(args),
        Command::Extract(args) => extract_cmd::run(args),
        Command::Inject(args) => inject_cmd::run(args),
    }
}
