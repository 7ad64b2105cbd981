//! Tracing/logging setup shared by the storefront binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
