//! Error types for code generation.

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while generating the benchmark program.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Partition count is zero or not a power of two.
    #[snafu(display("invalid partition count {partitions}: must be a positive power of two"))]
    InvalidPartitionCount { partitions: u64 },

    /// Partition count is larger than the fixed array size.
    #[snafu(display("partition count {partitions} exceeds array size {size}"))]
    PartitionsExceedSize { partitions: u64, size: u64 },

    /// The partitioned model disagreed with the reference model.
    #[snafu(display(
        "partitioned reduction diverged from reference for {partitions} partitions: {partitioned} != {reference}"
    ))]
    ModelDivergence { partitions: u64, partitioned: f64, reference: f64 },
}
