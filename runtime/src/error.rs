//! Error types for toolchain driving.

use std::path::PathBuf;
use std::process::ExitStatus;

use snafu::Snafu;

/// Result type for toolchain operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while compiling or running a generated benchmark.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Writing the generated source failed.
    #[snafu(display("failed to write generated source to {}: {source}", path.display()))]
    PersistSource { path: PathBuf, source: std::io::Error },

    /// The compiler could not be started at all.
    #[snafu(display("failed to launch clang: {source}. Is clang installed?"))]
    CompilerLaunch { source: std::io::Error },

    /// The compiler exited with a non-zero status.
    #[snafu(display("clang compilation failed:\n{stderr}"))]
    CompileFailed { stderr: String },

    /// The benchmark binary could not be started.
    #[snafu(display("failed to launch benchmark binary {}: {source}", path.display()))]
    BinaryLaunch { path: PathBuf, source: std::io::Error },

    /// The benchmark binary exited with a non-zero status, including an
    /// aborted in-binary equivalence assertion.
    #[snafu(display("benchmark binary exited with {status}:\n{stderr}"))]
    BenchmarkFailed { status: ExitStatus, stderr: String },

    /// The benchmark output lacks an expected report line.
    #[snafu(display("benchmark output is missing the `{line}` line"))]
    MissingReportLine { line: String },

    /// A report line carried an unparseable value.
    #[snafu(display("could not parse `{value}` as seconds in the `{line}` line"))]
    MalformedReportValue { line: String, value: String },
}
