//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use recoup_allocator::AllocationEngine;
use recoup_core::config::RecoupConfig;
use recoup_core::tracing::init_tracing;
use recoup_core::traits::IAllocator;
use recoup_session::{collector, SampleGenerator};

use crate::{AllocateArgs, SampleArgs};

/// Load the config at `path`, or defaults, then install tracing at the
/// configured level.
pub fn load_config(path: Option<&Path>) -> Result<RecoupConfig> {
    let config = match path {
        Some(path) => RecoupConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RecoupConfig::default(),
    };
    init_tracing(&config.observability.log_level);
    Ok(config)
}

/// Read a recoveries file: one JSON object keyed by `manager_{i}_exec_{j}`.
pub fn read_recoveries(path: &Path) -> Result<BTreeMap<String, f64>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read recoveries {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("recoveries {} is not a JSON object of numbers", path.display()))
}

pub fn allocate(args: &AllocateArgs, out: &mut dyn Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let shape = config.team.shape();
    let settings = config.incentive.settings();

    let keyed = read_recoveries(&args.recoveries)?;
    let recoveries = collector::collect_keyed(&keyed, shape)
        .with_context(|| format!("invalid recoveries in {}", args.recoveries.display()))?;
    let request = collector::build_request(shape, settings, recoveries)
        .context("invalid team shape or incentive settings")?;

    let result = AllocationEngine::new().allocate(&request);
    info!(
        eligible = result.eligible,
        total_pool = result.total_pool,
        target_achievement = result.target_achievement,
        "allocation complete"
    );

    let exporter = args.format.exporter(&config.export);
    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            exporter
                .export(&request, &result, &mut writer)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %args.format, "report written");
        }
        None => exporter
            .export(&request, &result, out)
            .context("failed to write report")?,
    }
    Ok(())
}

pub fn sample(args: &SampleArgs, out: &mut dyn Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let shape = collector::validate_shape(config.team.num_managers, config.team.exec_per_manager)
        .context("invalid team shape")?;

    let mut generator = SampleGenerator::new(args.profile, args.seed);
    let figures = generator.generate(shape, config.incentive.unit_mode);
    info!(
        profile = %args.profile,
        seed = args.seed,
        entries = figures.len(),
        "generated sample recoveries"
    );

    serde_json::to_writer_pretty(&mut *out, &figures).context("failed to write sample")?;
    writeln!(out).context("failed to write sample")?;
    Ok(())
}
