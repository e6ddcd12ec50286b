//! Log output for executables built on this crate.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unreadable.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a subscriber writing to standard error, filtered by `RUST_LOG`.
///
/// Calling this more than once, or after another subscriber was installed, is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice() {
        init();
        init();
        tracing::error!("still logging");
    }
}
