//! Opt-in tracing setup for hosts embedding `growth-chart`.
//!
//! The library only emits `tracing` events. Hosts either install their own
//! subscriber or call one of the helpers below with the `telemetry` feature.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "growth_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"growth_chart=trace"` while debugging animation ticks.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
