//! Rendering of the reference and partitioned reduction functions.
//!
//! Both functions reduce a `reduce_type` array in place: the final
//! accumulated value is stored back into slot 0.

/// Naive baseline: one long dependency chain through slot 0.
pub(crate) fn reference_reduction_lines(lines: &mut Vec<String>) {
    lines.push("void reference_reduction(reduce_type *b, int size) {".to_string());
    lines.push("  for (int i = 1; i < size; i++) {".to_string());
    lines.push("    b[0] += b[i];".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());
}

/// Unrolled reduction with `partitions` independent accumulator chains.
///
/// The array is split into `partitions` contiguous segments of
/// `size / partitions` elements. A single shared loop advances one index;
/// every iteration carries one `+=` per partition, so the chains stay
/// independent until the cleanup additions fold them back into `part0`.
/// Caller guarantees `partitions` divides `size` exactly.
pub(crate) fn partitioned_reduction_lines(partitions: u64, lines: &mut Vec<String>) {
    lines.push("void partitioned_reduction(reduce_type *a, int size) {".to_string());
    lines.push(format!("  int part_size = size / {partitions};"));

    for p in 0..partitions {
        lines.push(format!("  reduce_type part{p} = 0;"));
    }

    lines.push("  for (int i = 0; i < part_size; i++) {".to_string());
    for p in 0..partitions {
        lines.push(format!("    part{p} += a[part_size*{p} + i];"));
    }
    lines.push("  }".to_string());

    for p in 1..partitions {
        lines.push(format!("  part0 += part{p};"));
    }

    lines.push("  a[0] = part0;".to_string());
    lines.push("}".to_string());
}
