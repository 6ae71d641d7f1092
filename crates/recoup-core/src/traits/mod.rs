mod allocator;
mod exporter;

pub use allocator::IAllocator;
pub use exporter::IReportExporter;
