//! Equivalence tests between the partitioned model and the baseline.

use test_case::test_case;

use crate::Error;
use crate::model::{partitioned_reduce, reference_reduce, verify_equivalence};

#[test_case(1024, 1; "single partition")]
#[test_case(1024, 4; "four partitions")]
#[test_case(1024, 16; "sixteen partitions")]
#[test_case(1024, 1024; "segment length one")]
fn all_ones_reduce_to_array_length(size: usize, partitions: usize) {
    let mut values = vec![1.0f64; size];
    partitioned_reduce(&mut values, partitions);
    assert_eq!(values[0], size as f64);
}

#[test_case(512, 2)]
#[test_case(512, 8)]
#[test_case(2048, 64)]
#[test_case(4096, 4096)]
fn partitioned_matches_reference(size: usize, partitions: usize) {
    let values: Vec<f64> = (0..size).map(|i| (i % 23) as f64 - 11.0).collect();

    let mut partitioned = values.clone();
    let mut reference = values;
    partitioned_reduce(&mut partitioned, partitions);
    reference_reduce(&mut reference);

    assert_eq!(partitioned[0], reference[0]);
}

#[test]
fn reference_sums_into_slot_zero() {
    let mut values = vec![3.0, 1.0, 2.0, 4.0];
    reference_reduce(&mut values);
    assert_eq!(values[0], 10.0);
}

#[test]
fn verify_equivalence_accepts_valid_counts() {
    verify_equivalence(8).expect("equivalence check failed");
}

#[test]
fn verify_equivalence_rejects_non_power_of_two() {
    assert!(matches!(verify_equivalence(12), Err(Error::InvalidPartitionCount { .. })));
}
