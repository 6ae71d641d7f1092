//! # recoup-report
//!
//! Exporters that turn an [`AllocationResult`](recoup_core::AllocationResult)
//! into text for people and other tools.

pub mod csv_exporter;
pub mod currency;
pub mod format;
pub mod json_exporter;

pub use csv_exporter::CsvExporter;
pub use currency::{format_currency, format_recovery};
pub use format::ExportFormat;
pub use json_exporter::{ExportDocument, JsonExporter};
