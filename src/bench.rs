use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

pub mod config;

use self::config::BenchConfiguration;
use crate::{
    error::{BenchError, Result},
    executor,
    record::{stats::RecordStats, RecordStore},
    utils::threading::StartGate,
    workload::generate_file,
};

/// Separator printed after every segment
static RULE: &'static str = "-----------------------";

/// Outcome of one worker's replay
#[derive(Debug)]
struct WorkerOutcome {
    worker: usize,
    elapsed: Duration,
    result: Result<usize>,
}

/// Result of replaying one workload file with a fixed number of workers
#[derive(Clone, Debug)]
pub struct SegmentReport {
    pub path: PathBuf,
    pub workers: usize,
    pub elapsed: Duration,
    /// Operations applied, summed over all workers
    pub applied: usize,
    pub total_ops: usize,
    pub stats: RecordStats,
}

/// ### Replays `path` with `workers` concurrent workers against one fresh record
///
/// Every worker streams the whole file on its own. Workers are held on a gate
/// until all of them are spawned, timing runs from the gate opening until the
/// last worker is done.
pub fn run_segment(path: &Path, workers: usize, num_fields: usize) -> Result<SegmentReport> {
    if workers == 0 {
        return Err(BenchError::WorkerCount(workers));
    }
    if workers > num_cpus::get() {
        warn!(
            "Running {} workers on {} cpus, timings will include scheduling",
            workers,
            num_cpus::get()
        );
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("worker-{}", i))
        .build()?;

    let store = RecordStore::new(num_fields);
    let gate = StartGate::new();
    let (tx, rx) = crossbeam_channel::unbounded();

    info!("Replaying {} with {} workers", path.display(), workers);
    let started = pool.scope(|s| {
        for worker in 0..workers {
            let tx = tx.clone();
            let (store, gate) = (&store, &gate);
            s.spawn(move |_| {
                gate.wait();
                let t = Instant::now();
                let result = executor::execute_file(store, path);
                let _ = tx.send(WorkerOutcome {
                    worker,
                    elapsed: t.elapsed(),
                    result,
                });
            });
        }

        let started = Instant::now();
        gate.open();
        started
    });
    let elapsed = started.elapsed();
    drop(tx);

    let mut applied = 0;
    for outcome in rx.iter() {
        debug!(
            "Worker {} finished {} in {:?}",
            outcome.worker,
            path.display(),
            outcome.elapsed
        );
        match outcome.result {
            Ok(n) => applied += n,
            Err(e) => {
                return Err(BenchError::Worker {
                    worker: outcome.worker,
                    source: Box::new(e),
                })
            }
        }
    }

    Ok(SegmentReport {
        path: path.to_owned(),
        workers,
        elapsed,
        applied,
        total_ops: store.total_ops(),
        stats: store.stats(),
    })
}

/// Heading printed before the segments of one worker count
pub fn heading(workers: usize) -> String {
    match workers {
        1 => "Single thread execution".to_string(),
        2 => "Two threads execution".to_string(),
        3 => "Three threads execution".to_string(),
        n => format!("{} threads execution", n),
    }
}

/// Generates every workload, then replays each of them once per worker count
///
/// A segment that fails is logged and skipped, the run goes on with the next one.
pub fn run(config: &BenchConfiguration) -> Result<Vec<SegmentReport>> {
    info!("Generating {} workloads", config.workloads.len());
    for w in config.workloads.iter() {
        generate_file(&w.path, config.num_ops, &w.mix)?;
    }

    let mut reports = Vec::new();
    for &workers in config.worker_counts.iter() {
        println!("{}", heading(workers));

        for w in config.workloads.iter() {
            match run_segment(&w.path, workers, config.num_fields) {
                Ok(report) => {
                    println!("{} time: {} s", report.path.display(), report.elapsed.as_secs_f64());
                    print!("{}", report.stats);
                    println!("{}", RULE);
                    reports.push(report);
                }
                Err(e) => error!("Segment {} with {} workers failed: {}", w.path.display(), workers, e),
            }
        }
    }

    Ok(reports)
}
