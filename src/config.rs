use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::utils::{CircuitBreakerConfig, RetryConfig};

pub const DEFAULT_LOG_FILTER: &str = "info,food_order_lifecycle=debug";

/// Runtime settings, read from `ORDERS_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub metrics_port: u16,
    pub log_filter: String,
    pub load_retry: RetryConfig,
    pub breaker: CircuitBreakerConfig,
    /// Artificial delay for the simulated gateway and kitchen.
    pub simulated_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metrics_port: 9090,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            load_retry: RetryConfig::default(),
            breaker: CircuitBreakerConfig::default(),
            simulated_latency: Duration::ZERO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let load_retry = RetryConfig {
            max_attempts: parse(&lookup, "ORDERS_LOAD_RETRY_ATTEMPTS")?
                .unwrap_or(defaults.load_retry.max_attempts),
            initial_delay: parse(&lookup, "ORDERS_LOAD_RETRY_INITIAL_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.load_retry.initial_delay),
            ..defaults.load_retry
        };

        let breaker = CircuitBreakerConfig {
            failure_threshold: parse(&lookup, "ORDERS_BREAKER_FAILURE_THRESHOLD")?
                .unwrap_or(defaults.breaker.failure_threshold),
            timeout: parse(&lookup, "ORDERS_BREAKER_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.breaker.timeout),
            ..defaults.breaker
        };

        if load_retry.max_attempts == 0 {
            anyhow::bail!("ORDERS_LOAD_RETRY_ATTEMPTS must be at least 1");
        }
        if breaker.failure_threshold == 0 {
            anyhow::bail!("ORDERS_BREAKER_FAILURE_THRESHOLD must be at least 1");
        }

        Ok(Self {
            metrics_port: parse(&lookup, "ORDERS_METRICS_PORT")?.unwrap_or(defaults.metrics_port),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            load_retry,
            breaker,
            simulated_latency: parse(&lookup, "ORDERS_SIMULATED_LATENCY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}
