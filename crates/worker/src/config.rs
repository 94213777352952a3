use std::time::Duration;

/// Worker configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// How long to sleep when the queue is empty.
    pub poll_interval: Duration,
    /// Delay between consecutive ledger submissions within a job, to
    /// stay under the node's rate limits.
    pub mint_throttle: Duration,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `MINT_POLL_INTERVAL_SECS` | `5`     |
    /// | `MINT_THROTTLE_MS`        | `500`   |
    pub fn from_env() -> Self {
        let poll_interval_secs: u64 = std::env::var("MINT_POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("MINT_POLL_INTERVAL_SECS must be a valid u64");

        let mint_throttle_ms: u64 = std::env::var("MINT_THROTTLE_MS")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .expect("MINT_THROTTLE_MS must be a valid u64");

        Self {
            poll_interval: Duration::from_secs(poll_interval_secs),
            mint_throttle: Duration::from_millis(mint_throttle_ms),
        }
    }
}
