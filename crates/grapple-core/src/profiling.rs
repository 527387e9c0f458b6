//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __grapple_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__grapple_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__grapple_profile_noop as profile_scope;

/// Address the puffin HTTP server listens on.
pub const DEFAULT_PROFILER_ADDR: &str = "0.0.0.0:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable puffin scopes and start the HTTP server on [`DEFAULT_PROFILER_ADDR`].
///
/// # Example
/// ```no_run
/// grapple_core::profiling::init_profiling();
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling() {
    puffin::set_scopes_on(true);

    match puffin_http::Server::new(DEFAULT_PROFILER_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", DEFAULT_PROFILER_ADDR);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling() {
    tracing::debug!("profiling feature disabled, init_profiling is a no-op");
}
