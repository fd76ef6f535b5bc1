//! # Single-Target Probe
//!
//! One bounded HTTP GET against one target, compared against the BMC
//! signature. The probe is the error boundary of the whole scanner: every
//! failure class on the wire (refused, timed out, unresolvable, bad URL,
//! wrong status, wrong body) collapses into "no match" so that one bad
//! target can never abort or disturb the rest of the run.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use bmchunt_common::success;
use bmchunt_common::target::Target;

use crate::signature::SIGNATURE;

/// The slice of an HTTP response the signature check needs.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Seam between the probe logic and the actual HTTP client.
///
/// The engine and the tests drive the probe through this trait; production
/// code uses [`HttpProber`], tests substitute canned fetchers.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse>;
}

/// Production fetcher: a shared `reqwest` client with a hard per-request
/// timeout covering connect, request and body read.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for HttpProber {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

/// Probes one target, returning it back on a signature match.
///
/// Match means: status exactly 200 and a body byte-identical to
/// [`SIGNATURE`]. Anything else, including fetch errors of any kind, is
/// `None`. This function never returns an error and holds no state between
/// invocations, so it is safe to run concurrently at any fan-out.
pub async fn probe<F: HttpFetch + ?Sized>(fetcher: &F, target: &Target) -> Option<Target> {
    debug!("Testing {target}");

    match fetcher.get(target.url()).await {
        Ok(response) if response.status == 200 && response.body == SIGNATURE => {
            success!("SuperMicro BMC found: {target}");
            Some(target.clone())
        }
        _ => None,
    }
}
