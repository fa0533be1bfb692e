use contagion::{Config, Monitor};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Empty log: build succeeds, every query is None.
#[test]
fn test_empty_log() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.build();

    assert!(monitor.is_built());
    assert!(monitor.query(1, 2, 0, 100).is_none());
    assert!(monitor.timeline(1).is_none());
    assert_eq!(monitor.stats().node_count, 0);
}

/// Record calls after build must not change any subsequent query result.
#[test]
fn test_post_build_records_change_nothing() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(1, 2, 4);
    monitor.build();

    let before = monitor.query(1, 3, 0, 100);
    monitor.record(2, 3, 8);
    monitor.record(1, 3, 5);
    let after = monitor.query(1, 3, 0, 100);

    assert_eq!(before, after);
    assert!(after.is_none());
}

/// x > y always yields None, regardless of graph content.
#[test]
fn test_inverted_window_never_answers() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(1, 2, 4);
    monitor.record(2, 1, 8);
    monitor.build();

    assert!(monitor.query(1, 2, 5, 4).is_none());
    assert!(monitor.query(1, 2, i64::MAX, 0).is_none());
    assert!(monitor.query(1, 2, 1, 0).is_none());
}

/// All "no result" conditions are indistinguishable Nones.
#[test]
fn test_uniform_none_taxonomy() {
    init_logs();
    let mut unbuilt = Monitor::new();
    unbuilt.record(1, 2, 4);
    assert!(unbuilt.query(1, 2, 0, 100).is_none()); // not built

    let mut monitor = Monitor::new();
    monitor.record(1, 2, 4);
    monitor.build();
    assert!(monitor.query(9, 2, 0, 100).is_none()); // unknown source
    assert!(monitor.query(1, 9, 0, 100).is_none()); // no path
    assert!(monitor.query(1, 2, 9, 100).is_none()); // source never at/after x
    assert!(monitor.query(1, 2, 8, 4).is_none()); // inverted window
}

/// Zero is a legal id and timestamp everywhere.
#[test]
fn test_zero_boundaries() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(0, 1, 0);
    monitor.build();

    assert_eq!(monitor.stats().contacts_recorded, 1);
    let path = monitor.query(0, 1, 0, 0).unwrap();
    assert_eq!(path.len(), 2);
}

/// Self-communication creates a self-loop; a self-query answers through it.
#[test]
fn test_self_communication() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(5, 5, 3);
    monitor.build();

    assert_eq!(monitor.stats().node_count, 1);
    assert!(monitor.query(5, 5, 0, 3).is_some());
    assert!(monitor.query(5, 5, 0, 2).is_none());
}

/// The search tests neighbors, never the root itself. A self-query still
/// succeeds through the symmetric communication edge: the partner's neighbor
/// list leads straight back to the root, and the path collapses to the root
/// alone. Tightening the deadline below the root's timestamp is what makes a
/// self-query genuinely unanswerable.
#[test]
fn test_self_query_without_loop() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(1, 2, 4);
    monitor.build();

    let path = monitor.query(1, 1, 0, 100).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!((path[0].id, path[0].timestamp), (1, 4));

    assert!(monitor.query(1, 1, 0, 3).is_none());
}

/// Duplicate identical events are tolerated (parallel edges, same answers).
#[test]
fn test_duplicate_events() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(1, 2, 4);
    monitor.record(1, 2, 4);
    monitor.record(1, 2, 4);
    monitor.build();

    let stats = monitor.stats();
    assert_eq!(stats.node_count, 2);
    assert_eq!(stats.edge_count, 6);
    assert_eq!(monitor.query(1, 2, 4, 4).unwrap().len(), 2);
}

/// Large dataset stress: a long random-ish log builds and answers quickly.
#[test]
fn test_large_dataset() {
    init_logs();
    let config = Config::default().with_contact_capacity(20_000);
    let mut monitor = Monitor::with_config(config);

    // 10K contacts over 100 computers with scrambled timestamps.
    for i in 0..10_000i64 {
        let t = (i * 7919) % 10_000;
        monitor.record(i % 100, (i * 13 + 7) % 100, t);
    }
    monitor.build();

    let stats = monitor.stats();
    assert_eq!(stats.contacts_recorded, 10_000);
    assert_eq!(stats.computer_count, 100);

    for id in 0..100 {
        let timeline = monitor.timeline(id).unwrap();
        assert!(
            timeline.windows(2).all(|w| w[0].timestamp < w[1].timestamp),
            "timeline for {} not strictly increasing",
            id
        );
    }

    // Contact i = 0 is (0, 7) at t = 0: a direct hop must be found.
    assert!(monitor.query(0, 7, 0, 10_000).is_some());
}

/// Extreme but valid values do not overflow anything.
#[test]
fn test_extreme_timestamps() {
    init_logs();
    let mut monitor = Monitor::new();
    monitor.record(1, 2, 0);
    monitor.record(2, 3, i64::MAX);
    monitor.build();

    let path = monitor.query(1, 3, 0, i64::MAX).unwrap();
    assert_eq!(path.last().map(|n| n.timestamp), Some(i64::MAX));
}
