//! # recoup-cli
//!
//! The `recoup` binary. Reads a TOML config and a JSON recoveries file,
//! allocates, and writes a report; or prints sample recoveries for a shape.
//!
//! ```bash
//! recoup sample --profile mixed --seed 7 --config recoup.toml > recoveries.json
//! recoup allocate --config recoup.toml --recoveries recoveries.json --format csv
//! ```

pub mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use recoup_report::ExportFormat;
use recoup_session::SampleProfile;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "recoup", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Allocate the incentive pool for a set of recoveries and export a report
    Allocate(AllocateArgs),
    /// Print sample recoveries, keyed `manager_{i}_exec_{j}`, for the configured team
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// TOML config; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON object mapping `manager_{i}_exec_{j}` to a recovery figure
    #[arg(long)]
    pub recoveries: PathBuf,

    /// Report format
    #[arg(long, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Sample profile: low, average, high, mixed
    #[arg(long, default_value_t = SampleProfile::Average)]
    pub profile: SampleProfile,

    /// RNG seed; the same seed reproduces the same figures
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// TOML config; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute a parsed command, writing its primary output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Allocate(args) => commands::allocate(&args, out),
        Command::Sample(args) => commands::sample(&args, out),
    }
}
