//! # Concurrency Engine
//!
//! Fans the probe out over the whole target list and fans the matches back
//! in. Every target is submitted up front as its own task; a semaphore
//! sized to `ScanConfig::concurrency` is the admission gate that keeps at
//! most that many probes on the wire at once, however large the list is
//! (a /16 subnet is 65536 targets).
//!
//! A single collector drains completions, so the match list needs no lock.
//! The engine waits for every submitted probe — there is no early exit on
//! first match, no whole-run deadline and no cancellation; a stuck probe
//! ends via its own request timeout.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use bmchunt_common::config::ScanConfig;
use bmchunt_common::target::Target;

use crate::probe::{self, HttpFetch};

/// Invoked with the running count of completed probes, match or not.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Probes every target and returns the matches, in completion order.
///
/// Completion order is whatever the network produces, so the result carries
/// no ordering relative to `targets`. A probe that fails (or a task that
/// panics) contributes nothing and affects nothing else.
pub async fn run_all(
    targets: Vec<Target>,
    cfg: &ScanConfig,
    fetcher: Arc<dyn HttpFetch>,
    on_probe_complete: Option<ProgressFn>,
) -> Vec<Target> {
    let gate = Arc::new(Semaphore::new(cfg.concurrency));
    let mut in_flight = FuturesUnordered::new();

    for target in targets {
        let gate = gate.clone();
        let fetcher = fetcher.clone();

        in_flight.push(tokio::spawn(async move {
            // The semaphore is never closed, so this only fails if the
            // runtime is torn down under us.
            let Ok(_permit) = gate.acquire_owned().await else {
                return None;
            };
            probe::probe(fetcher.as_ref(), &target).await
        }));
    }

    let mut matches: Vec<Target> = Vec::new();
    let mut completed: usize = 0;

    while let Some(joined) = in_flight.next().await {
        completed += 1;
        if let Ok(Some(hit)) = joined {
            matches.push(hit);
        }
        if let Some(callback) = &on_probe_complete {
            callback(completed);
        }
    }

    matches
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
