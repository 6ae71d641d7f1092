use std::fmt;
use std::str::FromStr;

use recoup_core::config::ExportConfig;
use recoup_core::errors::RecoupError;
use recoup_core::traits::IReportExporter;

use crate::csv_exporter::CsvExporter;
use crate::json_exporter::JsonExporter;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Json];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Build the exporter for this format.
    pub fn exporter(self, config: &ExportConfig) -> Box<dyn IReportExporter> {
        match self {
            ExportFormat::Csv => Box::new(CsvExporter::from_config(config)),
            ExportFormat::Json => Box::new(JsonExporter::new()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = RecoupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| RecoupError::UnknownFormat { name: s.to_string() })
    }
}
