use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,grapple_drag=debug,grapple_input=info";

/// Install a global `fmt` subscriber.
///
/// Respects `RUST_LOG` when present. Calling this more than once is harmless;
/// later calls leave the first subscriber in place.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global `fmt` subscriber with an explicit fallback filter.
pub fn init_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init_with_filter("trace");
        tracing::debug!("logging initialised");
    }
}
