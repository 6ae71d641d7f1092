//! JSON report: the full result plus the inputs it was computed from.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use recoup_core::errors::{ExportError, RecoupResult};
use recoup_core::export_span;
use recoup_core::models::{AllocationRequest, AllocationResult, IncentiveSettings, TeamShape};
use recoup_core::traits::IReportExporter;

/// Top-level JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub generated_at: DateTime<Utc>,
    /// Settings as entered, in their own unit mode.
    pub settings: IncentiveSettings,
    pub shape: TeamShape,
    /// Native units throughout.
    pub result: AllocationResult,
}

impl ExportDocument {
    pub fn new(request: &AllocationRequest, result: &AllocationResult) -> Self {
        Self {
            generated_at: Utc::now(),
            settings: request.settings,
            shape: request.shape,
            result: result.clone(),
        }
    }
}

/// JSON exporter, pretty-printed unless `compact` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pub compact: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }
}

impl IReportExporter for JsonExporter {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn export(
        &self,
        request: &AllocationRequest,
        result: &AllocationResult,
        out: &mut dyn Write,
    ) -> RecoupResult<()> {
        let _span = export_span!(self.format_name()).entered();

        let document = ExportDocument::new(request, result);
        let written = if self.compact {
            serde_json::to_writer(&mut *out, &document)
        } else {
            serde_json::to_writer_pretty(&mut *out, &document)
        };
        written.map_err(|e| ExportError::Serialization {
            message: e.to_string(),
        })?;
        out.write_all(b"\n").map_err(ExportError::from)?;
        out.flush().map_err(ExportError::from)?;

        debug!(compact = self.compact, eligible = result.eligible, "json report written");
        Ok(())
    }
}
