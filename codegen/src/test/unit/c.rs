//! C renderer tests for the generated benchmark text.

use test_case::test_case;

use crate::c::render;
use crate::{ARRAY_SIZE, Error};

#[test]
fn fragments_appear_in_order() {
    let program = render(4).expect("render failed");
    let code = &program.code;

    let preamble = code.find("typedef double reduce_type;").expect("missing preamble");
    let reference = code.find("void reference_reduction(reduce_type *b, int size) {").expect("missing reference");
    let partitioned =
        code.find("void partitioned_reduction(reduce_type *a, int size) {").expect("missing partitioned");
    let driver = code.find("int main(void) {").expect("missing driver");

    assert!(preamble < reference, "preamble after reference:\n{code}");
    assert!(reference < partitioned, "reference after partitioned:\n{code}");
    assert!(partitioned < driver, "partitioned after driver:\n{code}");
}

#[test]
fn unrolled_body_interleaves_partitions() {
    let program = render(4).expect("render failed");
    let code = &program.code;

    assert!(code.contains("int part_size = size / 4;"), "missing segment length:\n{code}");
    for p in 0..4 {
        assert!(code.contains(&format!("reduce_type part{p} = 0;")), "missing accumulator {p}:\n{code}");
        assert!(code.contains(&format!("part{p} += a[part_size*{p} + i];")), "missing chain {p}:\n{code}");
    }
    for p in 1..4 {
        assert!(code.contains(&format!("part0 += part{p};")), "missing cleanup {p}:\n{code}");
    }
    assert!(code.contains("a[0] = part0;"), "missing final store:\n{code}");
}

#[test]
fn single_partition_degenerates_to_one_chain() {
    let program = render(1).expect("render failed");
    let code = &program.code;

    assert!(code.contains("int part_size = size / 1;"), "missing segment length:\n{code}");
    assert!(code.contains("part0 += a[part_size*0 + i];"), "missing accumulation:\n{code}");
    assert!(!code.contains("part1"), "unexpected second accumulator:\n{code}");
    assert!(!code.contains("part0 += part"), "unexpected cleanup additions:\n{code}");
}

#[test]
fn driver_times_asserts_and_reports() {
    let program = render(8).expect("render failed");
    let code = &program.code;

    assert!(code.contains(&format!("#define SIZE {ARRAY_SIZE}")), "missing size macro:\n{code}");
    assert!(code.contains("timespec_get(&partitioned_start, TIME_UTC);"), "missing timing:\n{code}");
    assert!(code.contains("assert(a[0] == b[0]);"), "missing equivalence assertion:\n{code}");
    assert!(code.contains("partitioned loop time:"), "missing partitioned report line:\n{code}");
    assert!(code.contains("reference loop time:"), "missing reference report line:\n{code}");
    assert!(code.contains("speedup:"), "missing speedup line:\n{code}");
}

#[test]
fn rendering_is_idempotent() {
    let first = render(16).expect("render failed");
    let second = render(16).expect("render failed");
    assert_eq!(first.code, second.code);
}

#[test_case(0; "zero")]
#[test_case(3; "three")]
#[test_case(6; "six")]
#[test_case(12; "twelve")]
#[test_case(1000; "thousand")]
fn rejects_non_power_of_two(partitions: u64) {
    assert!(matches!(render(partitions), Err(Error::InvalidPartitionCount { .. })));
}

#[test]
fn rejects_partition_count_above_array_size() {
    assert!(matches!(render(ARRAY_SIZE * 2), Err(Error::PartitionsExceedSize { .. })));
}

#[test]
fn program_metadata_matches_request() {
    let program = render(32).expect("render failed");
    assert_eq!(program.partitions, 32);
    assert_eq!(program.array_size, ARRAY_SIZE);
    assert_eq!(program.source_file(), "reduction_bench.c");
}
