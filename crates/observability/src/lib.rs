//! Tracing/logging setup shared by directory hosts and tests.

/// Initialize process-wide tracing with the default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatter).
pub mod tracing;

pub use self::tracing::init_with_filter;
