//! Explicit fork-join fan-out of API calls and latency aggregation.
//!
//! The concurrency degree is always the caller's `n`; every request future is created
//! up front and awaited behind a single `join_all` barrier.

use crate::classifier::{OutcomeCategory, category_of};
use crate::common::{ApiTestError, get_timestamp_millis};
use futures::future::join_all;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One completed (or transport-failed) call.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// `None` when the transport failed before a status arrived.
    pub status: Option<u16>,
    pub elapsed: Duration,
}

impl Sample {
    pub fn category(&self) -> Option<OutcomeCategory> {
        self.status.map(category_of)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatencyReport {
    pub samples: Vec<Sample>,
    /// Wall time from first dispatch to the join barrier.
    pub total: Duration,
    /// Wall-clock time of the first dispatch.
    pub started_at_ms: u64,
}

impl LatencyReport {
    pub fn from_samples(samples: Vec<Sample>, total: Duration, started_at_ms: u64) -> Self {
        Self {
            samples,
            total,
            started_at_ms,
        }
    }

    pub fn request_count(&self) -> usize {
        self.samples.len()
    }

    fn count(&self, category: OutcomeCategory) -> usize {
        self.samples
            .iter()
            .filter(|s| s.category() == Some(category))
            .count()
    }

    pub fn success_count(&self) -> usize {
        self.count(OutcomeCategory::Success)
    }

    pub fn server_error_count(&self) -> usize {
        self.count(OutcomeCategory::ServerError)
    }

    pub fn rate_limited_count(&self) -> usize {
        self.count(OutcomeCategory::RateLimited)
    }

    pub fn transport_failure_count(&self) -> usize {
        self.samples.iter().filter(|s| s.status.is_none()).count()
    }

    /// True when there was at least one call and every one of them came back 429.
    pub fn is_fully_rate_limited(&self) -> bool {
        !self.samples.is_empty() && self.rate_limited_count() == self.request_count()
    }

    /// Latencies of 2xx calls, ascending.
    pub fn success_latencies(&self) -> Vec<Duration> {
        let mut latencies: Vec<Duration> = self
            .samples
            .iter()
            .filter(|s| s.category() == Some(OutcomeCategory::Success))
            .map(|s| s.elapsed)
            .collect();
        latencies.sort();
        latencies
    }

    /// Sample at index `floor(len * p)`, falling back to the slowest one.
    pub fn percentile(&self, p: f64) -> Option<Duration> {
        let latencies = self.success_latencies();
        let index = (latencies.len() as f64 * p).floor() as usize;
        latencies.get(index).or(latencies.last()).copied()
    }

    /// Share of successful calls strictly faster than `threshold`; `None` without successes.
    pub fn fraction_under(&self, threshold: Duration) -> Option<f64> {
        let latencies = self.success_latencies();
        if latencies.is_empty() {
            return None;
        }
        let under = latencies.iter().filter(|d| **d < threshold).count();
        Some(under as f64 / latencies.len() as f64)
    }

    pub fn average(&self) -> Option<Duration> {
        let latencies = self.success_latencies();
        if latencies.is_empty() {
            return None;
        }
        Some(latencies.iter().sum::<Duration>() / latencies.len() as u32)
    }

    pub fn summary(&self) -> String {
        let mut line = format!(
            "Total time: {} ms, Successful: {}/{}, 5xx errors: {}, rate limited: {}",
            self.total.as_millis(),
            self.success_count(),
            self.request_count(),
            self.server_error_count(),
            self.rate_limited_count()
        );
        if let (Some(p95), Some(avg)) = (self.percentile(0.95), self.average()) {
            line.push_str(&format!(
                ", p95: {} ms, average: {} ms",
                p95.as_millis(),
                avg.as_millis()
            ));
        }
        line
    }
}

async fn timed<F>(request: F) -> Sample
where
    F: Future<Output = Result<reqwest::Response, ApiTestError>>,
{
    let start = Instant::now();
    let result = request.await;
    let elapsed = start.elapsed();
    match result {
        Ok(response) => Sample {
            status: Some(response.status().as_u16()),
            elapsed,
        },
        Err(e) => {
            debug!(error = %e, "request failed before a status was received");
            Sample {
                status: None,
                elapsed,
            }
        }
    }
}

/// Dispatch `n` requests built by `make_request(i)` at once and wait for all of them.
pub async fn fan_out<F, Fut>(n: usize, make_request: F) -> LatencyReport
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<reqwest::Response, ApiTestError>>,
{
    fan_out_all((0..n).map(make_request).collect()).await
}

/// Join an already-built batch, e.g. two request families mixed together.
pub async fn fan_out_all<Fut>(requests: Vec<Fut>) -> LatencyReport
where
    Fut: Future<Output = Result<reqwest::Response, ApiTestError>>,
{
    let n = requests.len();
    let started_at_ms = get_timestamp_millis();
    let start = Instant::now();
    let samples = join_all(requests.into_iter().map(timed)).await;
    let report = LatencyReport::from_samples(samples, start.elapsed(), started_at_ms);
    info!(requests = n, "{}", report.summary());
    report
}
