// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for the order orchestrator
// ============================================================================
//
// - Lifecycle commands (throughput, outcome, latency)
// - Payment and kitchen failures recorded on orders
// - Persistence failures, labelled with the side effect already performed
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct OrchestratorMetrics {
    registry: Registry,

    pub commands_total: IntCounterVec,
    pub command_duration: HistogramVec,
    pub payment_failures: IntCounter,
    pub kitchen_failures: IntCounter,
    pub persistence_failures: IntCounterVec,
}

impl OrchestratorMetrics {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> anyhow::Result<Self> {
        let commands_total = IntCounterVec::new(
            Opts::new("orders_commands_total", "Order lifecycle commands handled"),
            &["command", "outcome"],
        )?;
        registry.register(Box::new(commands_total.clone()))?;

        let command_duration = HistogramVec::new(
            HistogramOpts::new("orders_command_duration_seconds", "Order lifecycle command duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["command"],
        )?;
        registry.register(Box::new(command_duration.clone()))?;

        let payment_failures = IntCounter::new(
            "orders_payment_failures_total",
            "Charges or refunds refused by the payment gateway",
        )?;
        registry.register(Box::new(payment_failures.clone()))?;

        let kitchen_failures = IntCounter::new(
            "orders_kitchen_failures_total",
            "Kitchen notifications that failed",
        )?;
        registry.register(Box::new(kitchen_failures.clone()))?;

        let persistence_failures = IntCounterVec::new(
            Opts::new(
                "orders_persistence_failures_total",
                "Order writes that failed, by side effect already performed",
            ),
            &["after"],
        )?;
        registry.register(Box::new(persistence_failures.clone()))?;

        Ok(Self {
            registry,
            commands_total,
            command_duration,
            payment_failures,
            kitchen_failures,
            persistence_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_command(&self, command: &str, outcome: &str, seconds: f64) {
        self.commands_total.with_label_values(&[command, outcome]).inc();
        self.command_duration.with_label_values(&[command]).observe(seconds);
    }
}
