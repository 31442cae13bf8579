//! Periodic collection loop driving enumeration and sampling.

use crate::error::Result;
use crate::metrics::{
    interfaces::{is_loopback, InterfaceSource},
    registry::NetworkMetrics,
    sampler::StatsSampler,
};
use futures_util::stream::{self, BoxStream};
use std::sync::Arc;
use std::time::Duration;
use tokio::task;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::StreamExt;
use tracing::{debug, error, trace};

/// Outcome of one completed collection cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Interfaces whose sample was recorded
    pub sampled: usize,
    /// Loopback interfaces left out
    pub skipped: usize,
}

/// Enumerates interfaces and records one sample per non-loopback interface.
pub struct NetworkCollector<S, P> {
    metrics: Arc<NetworkMetrics>,
    source: S,
    sampler: P,
}

impl<S, P> NetworkCollector<S, P>
where
    S: InterfaceSource,
    P: StatsSampler,
{
    /// Create a collector writing into `metrics`.
    pub fn new(metrics: Arc<NetworkMetrics>, source: S, sampler: P) -> Self {
        Self {
            metrics,
            source,
            sampler,
        }
    }

    /// Run a single collection cycle.
    ///
    /// Enumeration happens before any metric is touched, so a failed
    /// enumeration leaves every value as it was.
    pub fn collect_once(&mut self) -> Result<CycleReport> {
        let interfaces = self.source.interface_names()?;
        let mut report = CycleReport::default();

        for interface in &interfaces {
            if is_loopback(interface) {
                trace!("Skipping loopback interface {}", interface);
                report.skipped += 1;
                continue;
            }

            let sample = self.sampler.sample(interface);
            self.metrics.record(interface, &sample);
            report.sampled += 1;
        }

        debug!(
            "Collected network metrics: {} sampled, {} skipped",
            report.sampled, report.skipped
        );
        Ok(report)
    }
}

impl<S, P> NetworkCollector<S, P>
where
    S: InterfaceSource + Send + 'static,
    P: StatsSampler + Send + 'static,
{
    /// Turn the collector into a never-ending stream of cycle outcomes.
    ///
    /// The first cycle runs immediately, later ones every `interval`. A failed
    /// cycle yields its error and the stream carries on with the next tick.
    /// Each cycle runs on the blocking pool since enumeration reads from the OS.
    pub fn into_stream(self, interval: Duration) -> BoxStream<'static, Result<CycleReport>> {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let stream = stream::unfold((self, ticker), |(collector, mut ticker)| async move {
            ticker.tick().await;

            let cycle = task::spawn_blocking(move || {
                let mut collector = collector;
                let outcome = collector.collect_once();
                (collector, outcome)
            });

            match cycle.await {
                Ok((collector, outcome)) => Some((outcome, (collector, ticker))),
                Err(e) => {
                    // The collector went down with the task.
                    error!("Collection cycle aborted: {}", e);
                    None
                }
            }
        });

        Box::pin(stream)
    }

    /// Collect forever, logging failed cycles.
    pub async fn run(self, interval: Duration) {
        let mut cycles = self.into_stream(interval);

        while let Some(outcome) = cycles.next().await {
            if let Err(e) = outcome {
                error!("Error fetching network interfaces: {}", e);
            }
        }
    }
}
