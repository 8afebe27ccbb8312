//! Concurrent access to one shared record from several workers
//!
//! Covers same-field write linearizability, whole-record snapshots racing
//! single-field operations, and counter totals after concurrent replay.

use std::{
    collections::HashSet,
    fs,
    sync::{Arc, Barrier},
    thread,
    time::Duration,
};

use rand::{rngs::StdRng, SeedableRng};
use record_bench::{
    bench::{self, config::BenchConfiguration},
    executor,
    workload::{generate, save_sequence, WorkloadMix},
    Operation, RecordStore,
};

const WORKERS: usize = 3;

#[test]
fn same_field_writes_keep_one_written_value() {
    let store = Arc::new(RecordStore::new(1));
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|w| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..10_000 {
                    // Distinct bit patterns per worker
                    let value = (w as i32 + 1) * 0x0101_0101 + (i % 2);
                    store.write_field(0, value);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let written: HashSet<i32> = (0..WORKERS as i32)
        .flat_map(|w| vec![(w + 1) * 0x0101_0101, (w + 1) * 0x0101_0101 + 1])
        .collect();
    assert!(written.contains(&store.read_field(0)));
    assert_eq!(store.write_count(0), WORKERS * 10_000);
}

#[test]
fn snapshots_race_single_field_operations_without_deadlock() {
    let store = Arc::new(RecordStore::new(3));
    let (tx, rx) = crossbeam_channel::unbounded();

    for w in 0..WORKERS {
        let store = store.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            for i in 0..5_000 {
                match (i + w) % 3 {
                    0 => store.write_field(i % 3, i as i32),
                    1 => {
                        store.read_field((i + 1) % 3);
                    }
                    _ => {
                        let snap = store.snapshot();
                        assert_eq!(snap.split(", ").count(), 3);
                    }
                }
            }
            tx.send(w).unwrap();
        });
    }
    drop(tx);

    let mut done = 0;
    while done < WORKERS {
        rx.recv_timeout(Duration::from_secs(30))
            .expect("workers did not finish, snapshot deadlocked");
        done += 1;
    }
    assert_eq!(store.total_ops(), WORKERS * 5_000);
}

#[test]
fn counters_add_up_after_concurrent_replay() {
    let mut rng = StdRng::seed_from_u64(42);
    let mix = WorkloadMix::new(&[(10.0, 10.0), (50.0, 10.0), (5.0, 5.0)], 10.0);
    let ops = generate(2_000, &mix, &mut rng);

    let store = Arc::new(RecordStore::new(3));
    let ops = Arc::new(ops);
    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let store = store.clone();
            let ops = ops.clone();
            thread::spawn(move || executor::execute(&store, &ops))
        })
        .collect();
    let applied: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    let per_field: usize = (0..3)
        .map(|i| store.read_count(i) + store.write_count(i))
        .sum();
    assert_eq!(applied, WORKERS * 2_000);
    assert_eq!(per_field + store.string_count(), store.total_ops());
    assert_eq!(store.total_ops(), applied);
    assert_eq!(store.read_count(1), WORKERS * 1_000);

    let stats = store.stats();
    assert!((stats.total_pct() - 100.0).abs() < 1e-9);
    assert_eq!(store.snapshot(), "1, 1, 1");
}

#[test]
fn workers_replay_one_file_independently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reads.txt");
    save_sequence(&path, &vec![Operation::Read(0); 100]).unwrap();

    let report = bench::run_segment(&path, 2, 1).unwrap();

    assert_eq!(report.applied, 200);
    assert_eq!(report.total_ops, 200);
    assert_eq!(report.stats.fields[0].read_pct, 100.0);
    assert_eq!(report.stats.fields[0].write_pct, 0.0);
    assert_eq!(report.stats.string_pct, 0.0);
}

#[test]
fn full_run_writes_workloads_and_reports_each_segment() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BenchConfiguration::default().with_dir(dir.path());
    config.num_ops = 300;

    let reports = bench::run(&config).unwrap();

    assert_eq!(reports.len(), 9);
    for w in config.workloads.iter() {
        let lines = fs::read_to_string(&w.path).unwrap().lines().count();
        assert_eq!(lines, 300);
    }
    for r in reports.iter() {
        assert_eq!(r.applied, 300 * r.workers);
        assert_eq!(r.total_ops, r.applied);
    }
}
