// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default.
///
/// The value is returned as a `String`; callers parse and validate it.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails and that the error
/// names the offending environment variable.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            format!("{err:#}").contains($key),
            "unexpected error: {err:#}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub metrics: metrics::MetricsConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            metrics: metrics::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Default listen address when `API_BIND_ADDR` is unset.
    pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

    /// HTTP listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP listener binds to. Defaults to 127.0.0.1:8080.
        pub bind_addr: SocketAddr,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `API_BIND_ADDR` is set but is not a socket address.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = optional_env!("API_BIND_ADDR", DEFAULT_BIND_ADDR);
            let bind_addr = raw
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid configuration API_BIND_ADDR={raw}"))?;

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    /// Which metrics backend to run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsKind {
        Noop,
        Prometheus,
    }

    /// Metrics backend selection.
    #[derive(Debug, Clone)]
    pub struct MetricsConfig {
        /// Backend chosen by `AXUM_METRICS_TYPE` (`noop` or `prom`). Defaults to noop.
        pub kind: MetricsKind,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error for any value other than `noop` or `prom`.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = optional_env!("AXUM_METRICS_TYPE", "noop");
            let kind = match raw.as_str() {
                "noop" => MetricsKind::Noop,
                "prom" => MetricsKind::Prometheus,
                other => bail!("Invalid configuration AXUM_METRICS_TYPE={other} (expected noop or prom)"),
            };

            Ok(Self { kind })
        }
    }
}
pub use metrics::{MetricsConfig, MetricsKind};

// ============================================================
// Tests
// ============================================================
