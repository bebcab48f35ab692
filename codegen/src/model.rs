//! Host-side mirror of the generated reduction kernels.
//!
//! Lets the generator check that the partitioned rewrite is equivalent to the
//! baseline before anything is handed to the external toolchain, instead of
//! relying solely on the assertion inside the generated binary.

use snafu::ensure;

use crate::error::{ModelDivergenceSnafu, Result};

/// In-place baseline reduction: slot 0 ends up holding the sum of every element.
pub fn reference_reduce(values: &mut [f64]) {
    for i in 1..values.len() {
        values[0] += values[i];
    }
}

/// In-place mirror of the generated partitioned kernel.
///
/// Same accumulator layout and cleanup order as the emitted C. Caller
/// guarantees `partitions` divides `values.len()` exactly.
pub fn partitioned_reduce(values: &mut [f64], partitions: usize) {
    let part_size = values.len() / partitions;
    let mut parts = vec![0.0f64; partitions];

    for i in 0..part_size {
        for (p, part) in parts.iter_mut().enumerate() {
            *part += values[part_size * p + i];
        }
    }

    for p in 1..partitions {
        parts[0] += parts[p];
    }

    values[0] = parts[0];
}

/// Pre-flight equivalence check run before the external toolchain is invoked.
///
/// Uses integer-valued elements so both reductions are exact in `f64` and the
/// comparison can demand exact equality.
pub fn verify_equivalence(partitions: u64) -> Result<()> {
    crate::validate_partitions(partitions)?;

    let size = (partitions as usize).max(4096);
    let values: Vec<f64> = (0..size).map(|i| (i % 17) as f64 - 8.0).collect();

    let mut partitioned = values.clone();
    let mut reference = values;
    partitioned_reduce(&mut partitioned, partitions as usize);
    reference_reduce(&mut reference);

    ensure!(
        partitioned[0] == reference[0],
        ModelDivergenceSnafu { partitions, partitioned: partitioned[0], reference: reference[0] }
    );

    tracing::debug!(partitions, total = partitioned[0], "model equivalence check passed");
    Ok(())
}
