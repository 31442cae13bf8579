//! Behavioural tests for the public collection API.

mod common;

use common::assert_all_declared_once;
use netstat_exporter::{
    ExporterError, InterfaceSample, NetworkCollector,
    NetworkMetrics, SimulatedSampler, StatsSampler, WebConfig,
};
use std::sync::Arc;

fn fixed_interfaces(
    list: &'static [&'static str],
) -> impl FnMut() -> netstat_exporter::Result<Vec<String>> {
    move || Ok(list.iter().map(|s| s.to_string()).collect())
}

/// Bytes counters advance by the fixed deltas per sample
#[test]
fn test_bytes_increment_per_sample() {
    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));

    for name in ["eth0", "wlan0", "enp3s0", "docker0"] {
        metrics.record(name, &SimulatedSampler.sample(name));

        assert_eq!(metrics.bytes_received.with_label_values(&[name]).get(), 1024.0);
        assert_eq!(metrics.bytes_transmitted.with_label_values(&[name]).get(), 2048.0);
    }
}

/// Interface speed is overwritten rather than accumulated
#[test]
fn test_interface_speed_overwrites() {
    let metrics = NetworkMetrics::new().expect("Should register metrics");
    let speed = metrics.interface_speed.with_label_values(&["eth0"]);

    speed.set(42.0);
    metrics.record("eth0", &SimulatedSampler::SAMPLE);
    assert_eq!(speed.get(), 1_000_000_000.0);

    metrics.record("eth0", &SimulatedSampler::SAMPLE);
    assert_eq!(speed.get(), 1_000_000_000.0);
}

/// Packet, error and drop counters scale linearly with the number of samples
#[test]
fn test_counters_scale_with_sample_count() {
    let metrics = NetworkMetrics::new().expect("Should register metrics");
    let k = 7;

    for _ in 0..k {
        metrics.record("eth0", &SimulatedSampler::SAMPLE);
    }

    let get = |vec: &prometheus::CounterVec| vec.with_label_values(&["eth0"]).get();
    let k = k as f64;
    assert_eq!(get(&metrics.packets_received), 100.0 * k);
    assert_eq!(get(&metrics.packets_transmitted), 200.0 * k);
    assert_eq!(get(&metrics.packets_received_errors), 5.0 * k);
    assert_eq!(get(&metrics.packets_transmitted_errors), 10.0 * k);
    assert_eq!(get(&metrics.packets_dropped_received), 1.0 * k);
    assert_eq!(get(&metrics.packets_dropped_transmitted), 2.0 * k);
}

/// Host-wide metrics react to every sample regardless of interface
#[test]
fn test_host_wide_metrics() {
    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));
    let mut collector = NetworkCollector::new(
        metrics.clone(),
        fixed_interfaces(&["eth0", "wlan0", "lo"]),
        SimulatedSampler,
    );

    let mut previous = 0.0;
    for cycle in 1..=3 {
        collector.collect_once().expect("Cycle should succeed");

        let established = metrics.tcp_connections_established.get();
        assert_eq!(established, 100.0 * cycle as f64);
        assert!(established >= previous);
        previous = established;

        assert_eq!(metrics.ping_latency_seconds.get(), 0.05);
    }
}

/// Loopback adapters never produce a series
#[test]
fn test_loopback_never_rendered() {
    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));
    let mut collector = NetworkCollector::new(
        metrics.clone(),
        fixed_interfaces(&["lo0", "eth0"]),
        SimulatedSampler,
    );

    let report = collector.collect_once().expect("Cycle should succeed");
    assert_eq!(report.sampled, 1);
    assert_eq!(report.skipped, 1);

    let text = metrics.render().expect("Should render");
    assert!(!text.contains("interface=\"lo0\""));
    assert!(text.contains("interface=\"eth0\""));
}

/// A failed enumeration leaves every value as it was
#[test]
fn test_enumeration_failure_is_side_effect_free() {
    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));
    let mut healthy =
        NetworkCollector::new(metrics.clone(), fixed_interfaces(&["eth0"]), SimulatedSampler);
    healthy.collect_once().expect("Cycle should succeed");
    let before = metrics.render().expect("Should render");

    let mut broken = NetworkCollector::new(
        metrics.clone(),
        || -> netstat_exporter::Result<Vec<String>> {
            Err(ExporterError::enumeration_error("permission denied"))
        },
        SimulatedSampler,
    );
    let result = broken.collect_once();

    assert!(matches!(result, Err(ExporterError::Enumeration(_))));
    assert_eq!(metrics.render().expect("Should render"), before);
}

/// A custom sampler plugs in without touching the registry or loop
#[test]
fn test_custom_sampler() {
    struct Quiet;

    impl StatsSampler for Quiet {
        fn sample(&self, _interface: &str) -> InterfaceSample {
            InterfaceSample {
                bytes_received: 1,
                bytes_transmitted: 0,
                packets_received: 0,
                packets_transmitted: 0,
                receive_errors: 0,
                transmit_errors: 0,
                receive_dropped: 0,
                transmit_dropped: 0,
                speed_bits_per_second: 100_000_000,
                tcp_connections_established: 0,
                ping_latency_seconds: 0.001,
            }
        }
    }

    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));
    let mut collector = NetworkCollector::new(metrics.clone(), fixed_interfaces(&["eth1"]), Quiet);
    collector.collect_once().expect("Cycle should succeed");

    assert_eq!(metrics.bytes_received.with_label_values(&["eth1"]).get(), 1.0);
    assert_eq!(metrics.interface_speed.with_label_values(&["eth1"]).get(), 100_000_000.0);
    assert_eq!(metrics.ping_latency_seconds.get(), 0.001);
}

/// Every metric name is declared exactly once after a cycle
#[test]
fn test_all_metric_names_rendered_once() {
    let metrics = Arc::new(NetworkMetrics::new().expect("Should register metrics"));
    let mut collector =
        NetworkCollector::new(metrics.clone(), fixed_interfaces(&["eth0", "wlan0"]), SimulatedSampler);
    collector.collect_once().expect("Cycle should succeed");

    assert_all_declared_once(&metrics.render().expect("Should render"));
}

/// WebConfig builder pattern
#[test]
fn test_web_config() {
    let config = WebConfig::default().with_host("::1").with_port(9100);

    assert_eq!(config.host, "::1");
    assert_eq!(config.port, 9100);
    assert_eq!(config.bind_address(), "[::1]:9100");
    assert_eq!(
        config.bind_address().parse::<std::net::SocketAddr>().ok(),
        config.socket_addr().ok()
    );
    assert!(config.socket_addr().expect("Loopback should be accepted").ip().is_loopback());
}

/// ExporterError creation and formatting
#[test]
fn test_exporter_error_types() {
    let enumeration = ExporterError::enumeration_error("permission denied");
    assert!(format!("{}", enumeration).contains("permission denied"));

    let web = ExporterError::web_server_error("address in use");
    assert!(format!("{}", web).contains("address in use"));

    let config = ExporterError::config_error("non-loopback host");
    assert!(format!("{}", config).contains("non-loopback host"));

    let encoding = ExporterError::encoding_error("invalid utf-8");
    assert!(format!("{}", encoding).contains("invalid utf-8"));
}
