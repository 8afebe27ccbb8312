#[macro_use]
extern crate log;

pub mod bench;
pub mod error;
pub mod executor;
pub mod record;
pub mod utils;
pub mod workload;

pub use error::{BenchError, Result};
pub use record::RecordStore;
pub use workload::operation::Operation;
