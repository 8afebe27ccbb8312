use std::path::{Path, PathBuf};

use crate::workload::WorkloadMix;

/// A workload file and the mix it is generated from
#[derive(Clone, Debug, PartialEq)]
pub struct WorkloadSpec {
    pub path: PathBuf,
    pub mix: WorkloadMix,
}

impl WorkloadSpec {
    pub fn new<P: Into<PathBuf>>(path: P, mix: WorkloadMix) -> WorkloadSpec {
        WorkloadSpec {
            path: path.into(),
            mix,
        }
    }
}

/// Fixed parameters of a benchmark run
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfiguration {
    pub num_fields: usize,
    pub num_ops: usize,
    pub worker_counts: Vec<usize>,
    pub workloads: Vec<WorkloadSpec>,
}

impl BenchConfiguration {
    /// Moves every workload file into `dir`, keeping its file name
    pub fn with_dir(mut self, dir: &Path) -> BenchConfiguration {
        for w in self.workloads.iter_mut() {
            if let Some(name) = w.path.file_name() {
                w.path = dir.join(name);
            }
        }
        self
    }
}

impl Default for BenchConfiguration {
    fn default() -> BenchConfiguration {
        BenchConfiguration {
            num_fields: 3,
            num_ops: 100_000,
            worker_counts: vec![1, 2, 3],
            workloads: vec![
                // Skewed towards reads of the second field
                WorkloadSpec::new(
                    "file_a.txt",
                    WorkloadMix::new(&[(10.0, 10.0), (50.0, 10.0), (5.0, 5.0)], 10.0),
                ),
                WorkloadSpec::new("file_b.txt", WorkloadMix::uniform(3, 14.29)),
                WorkloadSpec::new(
                    "file_c.txt",
                    WorkloadMix::new(&[(40.0, 5.0), (30.0, 5.0), (10.0, 5.0)], 5.0),
                ),
            ],
        }
    }
}
