//! Per-interface statistics sampling.

use serde::{Deserialize, Serialize};

/// One set of observations attributable to a single interface.
///
/// Counter fields are deltas to add; `speed_bits_per_second` and
/// `ping_latency_seconds` replace the previous gauge value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSample {
    pub bytes_received: u64,
    pub bytes_transmitted: u64,
    pub packets_received: u64,
    pub packets_transmitted: u64,
    pub receive_errors: u64,
    pub transmit_errors: u64,
    pub receive_dropped: u64,
    pub transmit_dropped: u64,
    /// Link speed in bits per second
    pub speed_bits_per_second: u64,
    /// Host-wide, not specific to the interface
    pub tcp_connections_established: u64,
    /// Host-wide round-trip time in seconds
    pub ping_latency_seconds: f64,
}

/// Source of per-interface observations.
///
/// Implementations must not block and must not fail: a source that cannot
/// observe something reports zero for that delta.
pub trait StatsSampler {
    /// Produce the observations for one interface.
    fn sample(&self, interface: &str) -> InterfaceSample;
}

/// Sampler reporting fixed placeholder values for every interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSampler;

impl SimulatedSampler {
    /// The sample reported for every interface.
    pub const SAMPLE: InterfaceSample = InterfaceSample {
        bytes_received: 1024,
        bytes_transmitted: 2048,
        packets_received: 100,
        packets_transmitted: 200,
        receive_errors: 5,
        transmit_errors: 10,
        receive_dropped: 1,
        transmit_dropped: 2,
        speed_bits_per_second: 1_000_000_000, // 1 Gbps
        tcp_connections_established: 50,
        ping_latency_seconds: 0.05,
    };
}

impl StatsSampler for SimulatedSampler {
    fn sample(&self, _interface: &str) -> InterfaceSample {
        Self::SAMPLE
    }
}
