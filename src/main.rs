use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io::{self, Write};

use optional_showcase::{list, run_scenarios, select};

#[derive(Parser)]
#[command(name = "optional_showcase")]
#[command(about = "Walk through the idioms of an optional value container", long_about = None)]
#[command(version)]
struct Cli {
    /// Only run scenarios whose name contains this text
    filter: Option<String>,

    /// Print the scenario names and exit
    #[arg(long)]
    list: bool,
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        list(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let scenarios = select(cli.filter.as_deref())?;
    run_scenarios(&mut out, &scenarios)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
