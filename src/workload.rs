pub mod generator;
pub mod operation;
pub mod sequence;

pub use generator::{generate, generate_file, FieldMix, WorkloadMix};
pub use operation::Operation;
pub use sequence::{load_sequence, save_sequence};
