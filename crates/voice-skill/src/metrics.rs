use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

#[derive(Clone)]
pub struct SkillMetrics {
    pub registry: Registry,
    pub intents: IntCounter,
    pub remote_calls: IntCounter,
    pub remote_failures: IntCounter,
    pub rejected_parameters: IntCounter,
}

impl SkillMetrics {
    pub fn new() -> Result<Self, String> {
        let registry = Registry::new();
        let counter = |name: &str, help: &str| {
            IntCounter::new(name, help).map_err(|e| format!("metrics init error: {e}"))
        };
        let metrics = Self {
            intents: counter("rc_intents_total", "Intents dispatched")?,
            remote_calls: counter("rc_remote_calls_total", "Remote API calls issued")?,
            remote_failures: counter(
                "rc_remote_failures_total",
                "Remote API calls that did not return 200",
            )?,
            rejected_parameters: counter(
                "rc_rejected_parameters_total",
                "Slot values missing or outside the vocabulary",
            )?,
            registry,
        };
        let _ = metrics.registry.register(Box::new(metrics.intents.clone()));
        let _ = metrics
            .registry
            .register(Box::new(metrics.remote_calls.clone()));
        let _ = metrics
            .registry
            .register(Box::new(metrics.remote_failures.clone()));
        let _ = metrics
            .registry
            .register(Box::new(metrics.rejected_parameters.clone()));
        Ok(metrics)
    }

    pub fn encode_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            return format!("error encoding metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}
