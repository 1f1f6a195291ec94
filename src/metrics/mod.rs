use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for the directory
// ============================================================================
//
// Covers:
// - Email change outcomes (changed / unchanged / rejected)
// - Email change latency
// - Notification failures
// - Current employee head-count
//
// There is no scrape endpoint; `render` produces the text exposition format
// for whoever wants to dump it.
// ============================================================================

pub mod outcome {
    pub const CHANGED: &str = "changed";
    pub const UNCHANGED: &str = "unchanged";
    pub const REJECTED: &str = "rejected";
}

pub struct Metrics {
    registry: Registry,

    pub email_changes: IntCounterVec,
    pub email_change_duration: HistogramVec,
    pub notification_failures: IntCounter,
    pub employee_count: IntGauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let email_changes = IntCounterVec::new(
            Opts::new("email_changes_total", "Email change requests by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(email_changes.clone()))?;

        let email_change_duration = HistogramVec::new(
            HistogramOpts::new("email_change_duration_seconds", "Email change processing duration")
                .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1]),
            &["outcome"],
        )?;
        registry.register(Box::new(email_change_duration.clone()))?;

        let notification_failures = IntCounter::new(
            "notification_failures_total",
            "Email-changed notifications that could not be delivered",
        )?;
        registry.register(Box::new(notification_failures.clone()))?;

        let employee_count = IntGauge::new(
            "employee_count",
            "Company employee count after the last committed change",
        )?;
        registry.register(Box::new(employee_count.clone()))?;

        Ok(Self {
            registry,
            email_changes,
            email_change_duration,
            notification_failures,
            employee_count,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one finished `change_email` call
    pub fn record_email_change(&self, outcome: &str, duration_secs: f64) {
        self.email_changes.with_label_values(&[outcome]).inc();
        self.email_change_duration
            .with_label_values(&[outcome])
            .observe(duration_secs);
    }

    pub fn record_notification_failure(&self) {
        self.notification_failures.inc();
    }

    pub fn set_employee_count(&self, count: u32) {
        self.employee_count.set(i64::from(count));
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
