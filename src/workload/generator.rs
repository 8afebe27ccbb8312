use std::path::Path;

use rand::{seq::SliceRandom, Rng};

use super::{operation::Operation, sequence::save_sequence};
use crate::{error::Result, utils::numbers::truncated_share};

/// Value stored by every generated write
pub const WRITE_VALUE: i32 = 1;

/// Read and write weights of a single field, in percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMix {
    pub read: f64,
    pub write: f64,
}

/// Target operation mix of a workload, in percent of the operation count
///
/// Weights are expected to sum to roughly 100. Any shortfall left after
/// truncating each share is filled with whole-record operations.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkloadMix {
    pub fields: Vec<FieldMix>,
    pub string: f64,
}

impl WorkloadMix {
    /// Builds a mix from `(read, write)` weights in field order
    pub fn new(fields: &[(f64, f64)], string: f64) -> WorkloadMix {
        WorkloadMix {
            fields: fields
                .iter()
                .map(|&(read, write)| FieldMix { read, write })
                .collect(),
            string,
        }
    }

    /// The same weight for every operation kind over `fields` fields
    pub fn uniform(fields: usize, weight: f64) -> WorkloadMix {
        WorkloadMix {
            fields: vec![
                FieldMix {
                    read: weight,
                    write: weight
                };
                fields
            ],
            string: weight,
        }
    }
}

/// Generates a shuffled sequence of at least `num_ops` operations following `mix`
pub fn generate<R: Rng + ?Sized>(num_ops: usize, mix: &WorkloadMix, rng: &mut R) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(num_ops);

    for (index, field) in mix.fields.iter().enumerate() {
        let reads = truncated_share(num_ops, field.read);
        let writes = truncated_share(num_ops, field.write);
        ops.extend(std::iter::repeat(Operation::Read(index)).take(reads));
        ops.extend(std::iter::repeat(Operation::Write(index, WRITE_VALUE)).take(writes));
    }

    let strings = truncated_share(num_ops, mix.string);
    ops.extend(std::iter::repeat(Operation::Serialize).take(strings));

    if ops.len() < num_ops {
        trace!("Padding workload with {} string operations", num_ops - ops.len());
        ops.resize(num_ops, Operation::Serialize);
    }

    ops.shuffle(rng);
    ops
}

/// Generates a workload and writes it to `path`, replacing any previous file
pub fn generate_file(path: &Path, num_ops: usize, mix: &WorkloadMix) -> Result<()> {
    let t = std::time::Instant::now();
    let ops = generate(num_ops, mix, &mut rand::thread_rng());
    save_sequence(path, &ops)?;

    debug!("It took {:?} to generate {}", t.elapsed(), path.display());
    Ok(())
}
