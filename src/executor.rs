use std::{io::BufRead, path::Path};

use crate::{error::Result, record::RecordStore, workload::operation::Operation, workload::sequence};

/// Applies one operation, dropping whatever it produces
pub fn apply(store: &RecordStore, op: &Operation) {
    match *op {
        Operation::Read(index) => {
            let _ = store.read_field(index);
        }
        Operation::Write(index, value) => store.write_field(index, value),
        Operation::Serialize => {
            let _ = store.snapshot();
        }
    }
}

/// Replays a sequence in order against a shared record
///
/// Holds no state of its own, any number of workers may replay at once.
pub fn execute(store: &RecordStore, ops: &[Operation]) -> usize {
    ops.iter().for_each(|op| apply(store, op));
    ops.len()
}

/// Replays a line stream, returning the number of operations applied
///
/// Lines that do not parse are skipped without touching the record.
pub fn execute_reader<R: BufRead>(store: &RecordStore, reader: R) -> Result<usize> {
    let mut applied = 0;
    let mut skipped = 0;

    for line in reader.lines() {
        match Operation::parse_line(&line?) {
            Some(op) => {
                apply(store, &op);
                applied += 1;
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        trace!("Skipped {} unrecognized workload lines", skipped);
    }
    Ok(applied)
}

/// Streams a workload file against a shared record
///
/// Each call opens its own handle, so workers never share a read position.
pub fn execute_file(store: &RecordStore, path: &Path) -> Result<usize> {
    let reader = sequence::open_shared(path)?;
    execute_reader(store, reader)
}
