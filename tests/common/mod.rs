use netstat_exporter::metrics::registry::METRIC_NAMES;

/// Assert that every metric name has exactly one `# TYPE` line in `text`.
pub fn assert_all_declared_once(text: &str) {
    for name in METRIC_NAMES {
        let declared = text
            .lines()
            .filter(|line| line.starts_with("# TYPE ") && line.split(' ').nth(2) == Some(name))
            .count();
        assert_eq!(declared, 1, "{name} declared {declared} times");
    }
}
