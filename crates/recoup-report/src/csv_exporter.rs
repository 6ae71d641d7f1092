//! Tabular CSV report: a summary block, a per-executive block and a
//! per-manager block, separated by blank lines.

use std::io::Write;

use csv::WriterBuilder;
use tracing::debug;

use recoup_core::config::{ExportConfig, RecoveryStyle};
use recoup_core::errors::{ExportError, RecoupResult};
use recoup_core::export_span;
use recoup_core::models::{AllocationRequest, AllocationResult};
use recoup_core::traits::IReportExporter;

use crate::currency::{format_currency, format_recovery};

type CsvWriter<'a> = csv::Writer<&'a mut dyn Write>;

/// CSV exporter. Incentives always render as currency; recoveries follow
/// `recovery_style`.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    currency_symbol: String,
    recovery_style: RecoveryStyle,
}

impl CsvExporter {
    pub fn new(currency_symbol: impl Into<String>, recovery_style: RecoveryStyle) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            recovery_style,
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.currency_symbol.clone(), config.recovery_style)
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.currency_symbol)
    }

    fn recovery(&self, value: f64) -> String {
        format_recovery(value, self.recovery_style, &self.currency_symbol)
    }

    fn write_summary(
        &self,
        wtr: &mut CsvWriter<'_>,
        request: &AllocationRequest,
        result: &AllocationResult,
    ) -> RecoupResult<()> {
        let settings = request.settings;
        let monthly_target = settings.unit_mode.to_lakhs(settings.monthly_target).to_native();

        let mut rows = vec![
            ("Eligible", yes_no(result.eligible)),
            ("Total Recovery", self.recovery(result.total_recovery)),
            ("Monthly Target", self.recovery(monthly_target)),
            ("Target Achievement", format!("{:.2}%", result.target_achievement)),
            ("Total Pool", self.money(result.total_pool)),
            ("Executive Pool", self.money(result.tier_totals.executive)),
            ("Manager Pool", self.money(result.tier_totals.manager)),
            ("Head Incentive", self.money(result.head_incentive)),
        ];
        if let Some(reason) = &result.reason {
            rows.push(("Reason", reason.clone()));
        }

        write_row(wtr, ["Metric", "Value"])?;
        for (label, value) in rows {
            write_row(wtr, [label, value.as_str()])?;
        }
        Ok(())
    }

    fn write_executives(
        &self,
        wtr: &mut CsvWriter<'_>,
        request: &AllocationRequest,
        result: &AllocationResult,
    ) -> RecoupResult<()> {
        write_row(wtr, ["Manager", "Executive", "Recovery", "Incentive"])?;
        for id in request.shape.executives() {
            let recovery = result.executive_recoveries.get(&id).copied().unwrap_or(0.0);
            let incentive = result.executive_incentives.get(&id).copied().unwrap_or(0.0);
            write_row(
                wtr,
                [
                    id.manager_id().to_string(),
                    format!("Executive {}", id.executive),
                    self.recovery(recovery),
                    self.money(incentive),
                ],
            )?;
        }
        Ok(())
    }

    fn write_managers(
        &self,
        wtr: &mut CsvWriter<'_>,
        request: &AllocationRequest,
        result: &AllocationResult,
    ) -> RecoupResult<()> {
        write_row(wtr, ["Manager", "Team Recovery", "Incentive"])?;
        for manager in request.shape.managers() {
            let recovery = result.team_recoveries.get(&manager).copied().unwrap_or(0.0);
            let incentive = result.manager_incentives.get(&manager).copied().unwrap_or(0.0);
            write_row(
                wtr,
                [manager.to_string(), self.recovery(recovery), self.money(incentive)],
            )?;
        }
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl IReportExporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn export(
        &self,
        request: &AllocationRequest,
        result: &AllocationResult,
        out: &mut dyn Write,
    ) -> RecoupResult<()> {
        let _span = export_span!(self.format_name()).entered();

        let mut wtr = WriterBuilder::new().flexible(true).from_writer(out);
        self.write_summary(&mut wtr, request, result)?;
        blank_line(&mut wtr)?;
        self.write_executives(&mut wtr, request, result)?;
        blank_line(&mut wtr)?;
        self.write_managers(&mut wtr, request, result)?;
        wtr.flush().map_err(ExportError::from)?;

        debug!(
            executives = request.shape.leaf_count(),
            managers = request.shape.num_managers,
            eligible = result.eligible,
            "csv report written"
        );
        Ok(())
    }
}

fn write_row<I, T>(wtr: &mut CsvWriter<'_>, record: I) -> RecoupResult<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    wtr.write_record(record).map_err(|e| ExportError::Csv {
        message: e.to_string(),
    })?;
    Ok(())
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}

// Separator lines go straight to the sink after a flush.
fn blank_line(wtr: &mut CsvWriter<'_>) -> RecoupResult<()> {
    wtr.flush().map_err(ExportError::from)?;
    wtr.get_mut().write_all(b"\n").map_err(ExportError::from)?;
    Ok(())
}
