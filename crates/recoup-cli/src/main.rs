use std::io;

use anyhow::Result;
use clap::Parser;

use recoup_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    recoup_cli::run(cli, &mut out)
}
