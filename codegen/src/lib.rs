//! Code generation for the partitioned reduction benchmark.
//!
//! Renders a complete, standalone C program containing a naive reference
//! reduction, an unrolled reduction parameterized by partition count, and a
//! timing driver that compares the two. The emitted text is deterministic:
//! identical inputs produce byte-identical programs.
//!
//! # Usage
//!
//! ```ignore
//! use splitsum_codegen::c;
//!
//! let program = c::render(4)?;
//! std::fs::write(program.source_file(), &program.code)?;
//! ```

pub mod c;
pub mod error;
pub mod model;
pub mod types;

#[cfg(test)]
pub mod test;

pub use error::*;
pub use types::*;

use snafu::ensure;

/// Element count of the benchmark arrays, baked into the generated driver.
/// Power of two so every valid partition count divides it exactly.
pub const ARRAY_SIZE: u64 = 1024 * 1024 * 64;

/// Check the partition-count contract: a positive power of two no larger
/// than [`ARRAY_SIZE`].
pub fn validate_partitions(partitions: u64) -> Result<()> {
    ensure!(partitions.is_power_of_two(), InvalidPartitionCountSnafu { partitions });
    ensure!(partitions <= ARRAY_SIZE, PartitionsExceedSizeSnafu { partitions, size: ARRAY_SIZE });
    Ok(())
}
