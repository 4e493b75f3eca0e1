//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install a JSON subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset or unparsable.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        ::tracing::debug!(default_filter, "tracing subscriber installed");
    }
    installed
}

#[cfg(test)]
mod tests {
    #[test]
    fn second_init_is_a_no_op() {
        super::init("debug");
        assert!(!super::init("debug"));
        ::tracing::info!("still logging after double init");
    }
}
