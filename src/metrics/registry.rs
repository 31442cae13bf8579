//! Prometheus metric definitions and text exposition.

use crate::error::{ExporterError, Result};
use crate::metrics::sampler::InterfaceSample;
use prometheus::{Counter, CounterVec, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

/// Label partitioning the per-interface series.
pub const INTERFACE_LABEL: &str = "interface";

/// Every metric name exposed by [`NetworkMetrics`], in registration order.
pub const METRIC_NAMES: [&str; 11] = [
    "network_traffic_bytes_received_total",
    "network_traffic_bytes_transmitted_total",
    "network_packets_received_total",
    "network_packets_transmitted_total",
    "network_packets_received_errors_total",
    "network_packets_transmitted_errors_total",
    "network_packets_dropped_received_total",
    "network_packets_dropped_transmitted_total",
    "network_tcp_connections_established",
    "network_ping_latency_seconds",
    "network_interface_speed_bits_per_second",
];

/// The canonical set of network metrics and the registry that owns them.
///
/// All metric types are internally atomic, so a single instance can be shared
/// between the collection loop and the HTTP server behind an `Arc` without any
/// further locking.
#[derive(Clone)]
pub struct NetworkMetrics {
    registry: Registry,

    // ========== Per-interface traffic ==========
    pub bytes_received: CounterVec,    // labels: interface
    pub bytes_transmitted: CounterVec, // labels: interface

    // ========== Per-interface packets ==========
    pub packets_received: CounterVec,            // labels: interface
    pub packets_transmitted: CounterVec,         // labels: interface
    pub packets_received_errors: CounterVec,     // labels: interface
    pub packets_transmitted_errors: CounterVec,  // labels: interface
    pub packets_dropped_received: CounterVec,    // labels: interface
    pub packets_dropped_transmitted: CounterVec, // labels: interface

    // ========== Host-wide ==========
    pub tcp_connections_established: Counter,
    pub ping_latency_seconds: Gauge,

    // ========== Link ==========
    pub interface_speed: GaugeVec, // labels: interface
}

impl NetworkMetrics {
    /// Creates all metrics and registers them with a fresh registry.
    pub fn new() -> Result<Self> {
        Self::register(Registry::new())
    }

    /// Creates all metrics and registers them with `registry`.
    ///
    /// Fails if any of the metric names is already registered there.
    pub fn register(registry: Registry) -> Result<Self> {
        let bytes_received = interface_counter(
            "network_traffic_bytes_received_total",
            "Total bytes received on the network interface",
        )?;
        let bytes_transmitted = interface_counter(
            "network_traffic_bytes_transmitted_total",
            "Total bytes transmitted on the network interface",
        )?;
        let packets_received = interface_counter(
            "network_packets_received_total",
            "Total packets received on the network interface",
        )?;
        let packets_transmitted = interface_counter(
            "network_packets_transmitted_total",
            "Total packets transmitted on the network interface",
        )?;
        let packets_received_errors = interface_counter(
            "network_packets_received_errors_total",
            "Total packets received errors on the network interface",
        )?;
        let packets_transmitted_errors = interface_counter(
            "network_packets_transmitted_errors_total",
            "Total packets transmitted errors on the network interface",
        )?;
        let packets_dropped_received = interface_counter(
            "network_packets_dropped_received_total",
            "Total dropped packets received on the network interface",
        )?;
        let packets_dropped_transmitted = interface_counter(
            "network_packets_dropped_transmitted_total",
            "Total dropped packets transmitted on the network interface",
        )?;
        let tcp_connections_established = Counter::new(
            "network_tcp_connections_established",
            "Number of established TCP connections",
        )?;
        let ping_latency_seconds = Gauge::new(
            "network_ping_latency_seconds",
            "Ping round-trip time in seconds",
        )?;
        let interface_speed = GaugeVec::new(
            Opts::new(
                "network_interface_speed_bits_per_second",
                "Speed of network interface in bits per second",
            ),
            &[INTERFACE_LABEL],
        )?;

        for counter in [
            &bytes_received,
            &bytes_transmitted,
            &packets_received,
            &packets_transmitted,
            &packets_received_errors,
            &packets_transmitted_errors,
            &packets_dropped_received,
            &packets_dropped_transmitted,
        ] {
            registry.register(Box::new(counter.clone()))?;
        }
        registry.register(Box::new(tcp_connections_established.clone()))?;
        registry.register(Box::new(ping_latency_seconds.clone()))?;
        registry.register(Box::new(interface_speed.clone()))?;

        Ok(Self {
            registry,
            bytes_received,
            bytes_transmitted,
            packets_received,
            packets_transmitted,
            packets_received_errors,
            packets_transmitted_errors,
            packets_dropped_received,
            packets_dropped_transmitted,
            tcp_connections_established,
            ping_latency_seconds,
            interface_speed,
        })
    }

    /// Apply one sample attributed to `interface`.
    ///
    /// Counters are increased by the sample's deltas, gauges are overwritten.
    pub fn record(&self, interface: &str, sample: &InterfaceSample) {
        let labels = [interface];

        self.bytes_received
            .with_label_values(&labels)
            .inc_by(sample.bytes_received as f64);
        self.bytes_transmitted
            .with_label_values(&labels)
            .inc_by(sample.bytes_transmitted as f64);

        self.packets_received
            .with_label_values(&labels)
            .inc_by(sample.packets_received as f64);
        self.packets_transmitted
            .with_label_values(&labels)
            .inc_by(sample.packets_transmitted as f64);
        self.packets_received_errors
            .with_label_values(&labels)
            .inc_by(sample.receive_errors as f64);
        self.packets_transmitted_errors
            .with_label_values(&labels)
            .inc_by(sample.transmit_errors as f64);
        self.packets_dropped_received
            .with_label_values(&labels)
            .inc_by(sample.receive_dropped as f64);
        self.packets_dropped_transmitted
            .with_label_values(&labels)
            .inc_by(sample.transmit_dropped as f64);

        self.tcp_connections_established
            .inc_by(sample.tcp_connections_established as f64);
        self.ping_latency_seconds.set(sample.ping_latency_seconds);

        self.interface_speed
            .with_label_values(&labels)
            .set(sample.speed_bits_per_second as f64);
    }

    /// Render every registered metric in the Prometheus text format.
    ///
    /// Families are sorted by name and series by label value, so two renders of
    /// the same state are byte-identical.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| ExporterError::encoding_error(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| ExporterError::encoding_error(e.to_string()))
    }
}

fn interface_counter(name: &str, help: &str) -> Result<CounterVec> {
    Ok(CounterVec::new(Opts::new(name, help), &[INTERFACE_LABEL])?)
}
