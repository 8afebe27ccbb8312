use std::sync::atomic::{AtomicUsize, Ordering};

use super::stats::{FieldStats, RecordStats};
use crate::utils::numbers::percentage;

/// Operation counters for a record
///
/// Counters are observational only, there is no ordering between them.
/// A report taken while workers are running is a point-in-time approximation.
#[derive(Debug)]
pub struct OpCounters {
    reads: Box<[AtomicUsize]>,
    writes: Box<[AtomicUsize]>,
    strings: AtomicUsize,
    total: AtomicUsize,
}

impl OpCounters {
    pub fn new(fields: usize) -> OpCounters {
        OpCounters {
            reads: (0..fields).map(|_| AtomicUsize::new(0)).collect(),
            writes: (0..fields).map(|_| AtomicUsize::new(0)).collect(),
            strings: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }

    pub fn record_read(&self, index: usize) {
        self.reads[index].fetch_add(1, Ordering::Relaxed);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self, index: usize) {
        self.writes[index].fetch_add(1, Ordering::Relaxed);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_string(&self) {
        self.strings.fetch_add(1, Ordering::Relaxed);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reads(&self, index: usize) -> usize {
        self.reads[index].load(Ordering::Relaxed)
    }

    pub fn writes(&self, index: usize) -> usize {
        self.writes[index].load(Ordering::Relaxed)
    }

    pub fn strings(&self) -> usize {
        self.strings.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Percentages of every counter against the total operation count
    pub fn stats(&self) -> RecordStats {
        // Zero operations reports every share as 0%
        let total = self.total().max(1);

        let fields = (0..self.reads.len())
            .map(|i| FieldStats {
                read_pct: percentage(self.reads(i), total),
                write_pct: percentage(self.writes(i), total),
            })
            .collect();

        RecordStats {
            fields,
            string_pct: percentage(self.strings(), total),
        }
    }
}
