use std::io::Write;

use crate::errors::RecoupResult;
use crate::models::{AllocationRequest, AllocationResult};

/// Renders an allocation result for consumption outside the process.
pub trait IReportExporter {
    /// Short format name, e.g. "csv".
    fn format_name(&self) -> &'static str;

    /// Write the report for `result`, computed from `request`, into `out`.
    fn export(
        &self,
        request: &AllocationRequest,
        result: &AllocationResult,
        out: &mut dyn Write,
    ) -> RecoupResult<()>;
}
