//! Process-wide logging setup shared by the jobboard binaries.

/// Initialize tracing with the default filter (`info`, overridable through
/// `RUST_LOG`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
