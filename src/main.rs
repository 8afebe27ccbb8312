#[macro_use]
extern crate log;

use record_bench::bench::{self, config::BenchConfiguration};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BenchConfiguration::default();
    info!(
        "Benchmarking {} fields with {} operations per workload",
        config.num_fields, config.num_ops
    );

    let t = std::time::Instant::now();
    let reports = bench::run(&config)?;
    debug!("It took {:?} to run {} segments", t.elapsed(), reports.len());

    Ok(())
}
