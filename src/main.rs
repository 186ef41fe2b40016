use anyhow::Result;
use clap::Parser;
use datascout::{Cli, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::explore::run(&cli)
}
