//! Toolchain driving for generated reduction benchmarks.
//!
//! Persists rendered C source, compiles it with a fixed clang invocation,
//! and runs the produced binary, turning its printed timings into a
//! structured report. Every external failure is fatal for the invocation;
//! there is no retry path.

pub mod clang;
pub mod error;
pub mod report;

pub use clang::{CLANG_FLAGS, CompiledBenchmark, persist};
pub use error::*;
pub use report::BenchReport;
