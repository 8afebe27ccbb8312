use parking_lot::{RwLock, RwLockReadGuard};

pub mod counters;
pub mod stats;

use self::{counters::OpCounters, stats::RecordStats};

/// Separator used between field values when a record is rendered
static SEPARATOR: &'static str = ", ";

/// A fixed-size record of integer fields shared between workers
///
/// Every field sits behind its own reader-writer lock, so operations on
/// disjoint fields never contend. The field count is fixed at construction.
#[derive(Debug)]
pub struct RecordStore {
    fields: Box<[RwLock<i32>]>,
    counters: OpCounters,
}

impl RecordStore {
    /// Creates a record with `fields` fields, all set to 0
    pub fn new(fields: usize) -> RecordStore {
        trace!("Initializing record store with {} fields", fields);
        RecordStore {
            fields: (0..fields).map(|_| RwLock::new(0)).collect(),
            counters: OpCounters::new(fields),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Reads a single field under its shared lock
    ///
    /// Panics if `index` is not below [`field_count`](Self::field_count).
    pub fn read_field(&self, index: usize) -> i32 {
        let field = self.field(index).read();
        self.counters.record_read(index);
        *field
    }

    /// Stores `value` into a single field under its exclusive lock
    ///
    /// Panics if `index` is not below [`field_count`](Self::field_count).
    pub fn write_field(&self, index: usize, value: i32) {
        let mut field = self.field(index).write();
        self.counters.record_write(index);
        *field = value;
    }

    /// ### Renders every field as a comma separated list
    ///
    /// Shared locks are taken on all fields in increasing index order and held
    /// until rendering is done. Any whole-record operation must keep that order.
    pub fn snapshot(&self) -> String {
        let guards: Vec<RwLockReadGuard<'_, i32>> =
            self.fields.iter().map(|field| field.read()).collect();

        let rendered = guards
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        self.counters.record_string();
        rendered
    }

    /// Percent report of every operation kind, taken without locking
    pub fn stats(&self) -> RecordStats {
        self.counters.stats()
    }

    pub fn read_count(&self, index: usize) -> usize {
        self.counters.reads(index)
    }

    pub fn write_count(&self, index: usize) -> usize {
        self.counters.writes(index)
    }

    pub fn string_count(&self) -> usize {
        self.counters.strings()
    }

    pub fn total_ops(&self) -> usize {
        self.counters.total()
    }

    fn field(&self, index: usize) -> &RwLock<i32> {
        match self.fields.get(index) {
            Some(field) => field,
            None => panic!(
                "field index {} out of range for a record of {} fields",
                index,
                self.field_count()
            ),
        }
    }
}

impl From<&RecordStore> for String {
    fn from(store: &RecordStore) -> String {
        store.snapshot()
    }
}
