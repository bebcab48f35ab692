//! C source generation for the reduction benchmark.
//!
//! Renders a complete C11 program from four ordered fragments: a fixed
//! preamble, the reference reduction, the partitioned reduction under test,
//! and a timing driver. The result is suitable for compilation with
//! `clang -std=c11 -fno-unroll-loops -O3`.
//!
//! # Generated program
//!
//! ```c
//! void reference_reduction(reduce_type *b, int size);
//! void partitioned_reduction(reduce_type *a, int size);
//! int main(void);
//! ```
//!
//! `main` fills two `SIZE`-element arrays with the constant `1`, times both
//! reductions, asserts they agree, and prints two elapsed-time lines plus a
//! speedup line.

pub mod reduction;

use crate::error::Result;
use crate::types::RenderedProgram;
use crate::{ARRAY_SIZE, validate_partitions};

use self::reduction::{partitioned_reduction_lines, reference_reduction_lines};

/// Base name for the emitted source file and binary.
pub const PROGRAM_NAME: &str = "reduction_bench";

/// C program renderer for the partitioned reduction benchmark.
pub struct CProgramRenderer;

impl CProgramRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full benchmark program for the given partition count.
    ///
    /// # Errors
    /// Returns an error if `partitions` is zero, not a power of two, or
    /// larger than [`ARRAY_SIZE`].
    pub fn render(&self, partitions: u64) -> Result<RenderedProgram> {
        validate_partitions(partitions)?;

        let mut code_lines: Vec<String> = Vec::new();

        preamble_lines(&mut code_lines);
        code_lines.push(String::new());
        reference_reduction_lines(&mut code_lines);
        code_lines.push(String::new());
        partitioned_reduction_lines(partitions, &mut code_lines);
        code_lines.push(String::new());
        driver_lines(&mut code_lines);
        code_lines.push(String::new());

        let code = code_lines.join("\n");
        tracing::debug!(partitions, bytes = code.len(), "rendered reduction benchmark");

        Ok(RenderedProgram::new(code, PROGRAM_NAME.to_string(), partitions, ARRAY_SIZE))
    }
}

impl Default for CProgramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Includes, the `reduce_type` typedef, and the elapsed-time helper.
fn preamble_lines(lines: &mut Vec<String>) {
    lines.push("#include <assert.h>".to_string());
    lines.push("#include <stdio.h>".to_string());
    lines.push("#include <stdlib.h>".to_string());
    lines.push("#include <time.h>".to_string());
    lines.push(String::new());
    lines.push("typedef double reduce_type;".to_string());
    lines.push(String::new());
    lines.push("static double elapsed_seconds(struct timespec start, struct timespec stop) {".to_string());
    lines.push(
        "  return (double)(stop.tv_sec - start.tv_sec) + (double)(stop.tv_nsec - start.tv_nsec) / 1e9;".to_string(),
    );
    lines.push("}".to_string());
}

/// `main`: allocate, initialize, time both reductions, assert agreement,
/// print the report lines.
fn driver_lines(lines: &mut Vec<String>) {
    lines.push(format!("#define SIZE {ARRAY_SIZE}"));
    lines.push(String::new());
    lines.push("int main(void) {".to_string());
    lines.push("  reduce_type *a = (reduce_type *)malloc(SIZE * sizeof(reduce_type));".to_string());
    lines.push("  reduce_type *b = (reduce_type *)malloc(SIZE * sizeof(reduce_type));".to_string());
    lines.push("  if (a == NULL || b == NULL) {".to_string());
    lines.push("    fprintf(stderr, \"allocation failed\\n\");".to_string());
    lines.push("    return 1;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  for (int i = 0; i < SIZE; i++) {".to_string());
    lines.push("    a[i] = 1;".to_string());
    lines.push("    b[i] = 1;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  struct timespec partitioned_start, partitioned_stop;".to_string());
    lines.push("  timespec_get(&partitioned_start, TIME_UTC);".to_string());
    lines.push("  partitioned_reduction(a, SIZE);".to_string());
    lines.push("  timespec_get(&partitioned_stop, TIME_UTC);".to_string());
    lines.push("  double partitioned_seconds = elapsed_seconds(partitioned_start, partitioned_stop);".to_string());
    lines.push(String::new());
    lines.push("  struct timespec reference_start, reference_stop;".to_string());
    lines.push("  timespec_get(&reference_start, TIME_UTC);".to_string());
    lines.push("  reference_reduction(b, SIZE);".to_string());
    lines.push("  timespec_get(&reference_stop, TIME_UTC);".to_string());
    lines.push("  double reference_seconds = elapsed_seconds(reference_start, reference_stop);".to_string());
    lines.push(String::new());
    // Both sums are exact integers below 2^53, so equality is exact.
    lines.push("  assert(a[0] == b[0]);".to_string());
    lines.push(String::new());
    lines.push("  printf(\"partitioned loop time: %.9f\\n\", partitioned_seconds);".to_string());
    lines.push("  printf(\"reference loop time: %.9f\\n\", reference_seconds);".to_string());
    lines.push("  printf(\"speedup: %.9f\\n\", reference_seconds / partitioned_seconds);".to_string());
    lines.push(String::new());
    lines.push("  free(a);".to_string());
    lines.push("  free(b);".to_string());
    lines.push("  return 0;".to_string());
    lines.push("}".to_string());
}

/// Public render function for the C benchmark program.
pub fn render(partitions: u64) -> Result<RenderedProgram> {
    CProgramRenderer::new().render(partitions)
}
