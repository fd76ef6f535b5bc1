use std::time::Duration;

/// Knobs for a scan run.
///
/// The defaults are the tool's fixed policy: 50 probes in flight at most,
/// one second per request, one attempt per target. There is deliberately
/// no retry or backoff setting.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Upper bound on simultaneously executing probes.
    pub concurrency: usize,
    /// Hard per-request timeout covering connect, send and body read.
    pub timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: 50,
            timeout: Duration::from_secs(1),
        }
    }
}
