// src/infrastructure/metrics/noop/mod.rs
mod noop_metrics;

pub use noop_metrics::NoopMetrics;
use std::sync::Arc;

/// Creates a new no-op metrics implementation.
///
/// All metrics calls are ignored and `render` returns an empty string.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    Ok(Arc::new(NoopMetrics::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nothing() -> anyhow::Result<()> {
        let metrics = create()?;
        metrics.record_envelope(200);
        assert!(metrics.render().is_empty());
        Ok(())
    }
}
