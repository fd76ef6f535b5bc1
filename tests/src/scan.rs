use std::fs;
use std::sync::Arc;
use std::time::Duration;

use bmchunt_common::config::ScanConfig;
use bmchunt_common::target::{self, Target};
use bmchunt_core::probe::HttpProber;
use bmchunt_core::signature::SIGNATURE;
use bmchunt_core::{engine, report};

use crate::util::{MockEndpoint, TempDir, TempFile};

fn fast_cfg() -> ScanConfig {
    ScanConfig {
        concurrency: 50,
        timeout: Duration::from_millis(500),
    }
}

/// The headline scenario: an rhosts file mixing a real BMC lookalike, a
/// reachable host serving the wrong page, and an unresolvable name. Only
/// the lookalike may end up in the results, and nothing may abort the run.
#[tokio::test]
async fn rhosts_scan_finds_only_the_matching_endpoint() {
    let bmc = MockEndpoint::serve("HTTP/1.1 200 OK", SIGNATURE.to_vec())
        .await
        .unwrap();

    let mut wrong_page = SIGNATURE.to_vec();
    wrong_page[0] ^= 0x01;
    let decoy = MockEndpoint::serve("HTTP/1.1 200 OK", wrong_page)
        .await
        .unwrap();

    let rhosts = TempFile::with_lines(
        "rhosts_e2e",
        &[&bmc.host(), &decoy.host(), "badhost.invalid"],
    );

    let cfg = fast_cfg();
    let targets = target::targets_from_rhosts(&rhosts.path).unwrap();
    assert_eq!(targets.len(), 3);

    let prober = Arc::new(HttpProber::new(cfg.timeout).unwrap());
    let matches = engine::run_all(targets, &cfg, prober, None).await;

    let expected = Target::from_host(&bmc.host());
    assert_eq!(matches, vec![expected]);
}

/// The signature body under any status other than 200 is not a match.
#[tokio::test]
async fn right_body_wrong_status_is_ignored() {
    let endpoint = MockEndpoint::serve("HTTP/1.1 404 Not Found", SIGNATURE.to_vec())
        .await
        .unwrap();

    let rhosts = TempFile::with_lines("rhosts_404", &[&endpoint.host()]);

    let cfg = fast_cfg();
    let targets = target::targets_from_rhosts(&rhosts.path).unwrap();
    let prober = Arc::new(HttpProber::new(cfg.timeout).unwrap());

    let matches = engine::run_all(targets, &cfg, prober, None).await;
    assert!(matches.is_empty());
}

/// A subnet sweep with no live hosts still completes and still writes a
/// report file containing an empty array.
#[tokio::test]
async fn empty_subnet_sweep_writes_empty_report() {
    // TEST-NET-1, nothing answers there.
    let cfg = ScanConfig {
        concurrency: 50,
        timeout: Duration::from_millis(250),
    };
    let targets = target::targets_from_subnet("192.0.2.0/30").unwrap();
    assert_eq!(targets.len(), 4);

    let prober = Arc::new(HttpProber::new(cfg.timeout).unwrap());
    let matches = engine::run_all(targets, &cfg, prober, None).await;
    assert!(matches.is_empty());

    let dir = TempDir::new("empty_report");
    let path = report::write_report(&matches, &dir.path).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(parsed.is_empty());
}

/// The progress callback fires once per target even when some probes fail
/// instantly and others hit a live endpoint.
#[tokio::test]
async fn progress_counts_every_probe_in_a_mixed_run() {
    let bmc = MockEndpoint::serve("HTTP/1.1 200 OK", SIGNATURE.to_vec())
        .await
        .unwrap();

    let rhosts = TempFile::with_lines(
        "rhosts_progress",
        &[&bmc.host(), "badhost.invalid", "also.invalid"],
    );

    let cfg = fast_cfg();
    let targets = target::targets_from_rhosts(&rhosts.path).unwrap();
    let total = targets.len();

    let completed = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let completed_in_cb = completed.clone();
    let on_complete: engine::ProgressFn = Box::new(move |count| {
        completed_in_cb.store(count, std::sync::atomic::Ordering::SeqCst);
    });

    let prober = Arc::new(HttpProber::new(cfg.timeout).unwrap());
    let matches = engine::run_all(targets, &cfg, prober, Some(on_complete)).await;

    assert_eq!(completed.load(std::sync::atomic::Ordering::SeqCst), total);
    assert_eq!(matches.len(), 1);
}
