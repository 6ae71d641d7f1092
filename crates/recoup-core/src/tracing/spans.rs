//! Span definitions per operation.

/// Create an allocation span.
#[macro_export]
macro_rules! allocation_span {
    ($managers:expr, $executives:expr, $unit_mode:expr) => {
        ::tracing::info_span!(
            "recoup.allocation",
            managers = $managers,
            executives = $executives,
            unit_mode = %$unit_mode
        )
    };
}

/// Create an export span.
#[macro_export]
macro_rules! export_span {
    ($format:expr) => {
        ::tracing::info_span!("recoup.export", format = %$format)
    };
}
