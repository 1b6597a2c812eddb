mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use nepcal::Calendar;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let calendar = Calendar::standard()?;
    let mut out = io::stdout().lock();
    cli.run(&calendar, &mut out)
}
