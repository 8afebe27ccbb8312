pub mod numbers;
pub mod threading;
