//! Clang compilation and execution of generated benchmark programs.
//!
//! Compiles the rendered C source via `clang -std=c11 -fno-unroll-loops -O3`
//! and runs the resulting executable. Compiler-level loop unrolling is
//! disabled so only the unrolling baked into the generated source is
//! measured.

use std::path::{Path, PathBuf};
use std::process::Command;

use snafu::{ResultExt, ensure};
use splitsum_codegen::RenderedProgram;

use crate::error::{
    BenchmarkFailedSnafu, BinaryLaunchSnafu, CompileFailedSnafu, CompilerLaunchSnafu, PersistSourceSnafu, Result,
};

/// Fixed compiler flag set. Not configurable: the language standard, the
/// unrolling behavior, and the optimization level are part of what the
/// benchmark measures.
pub const CLANG_FLAGS: [&str; 3] = ["-std=c11", "-fno-unroll-loops", "-O3"];

/// Overwrite-create `path` with the generated source text.
pub fn persist(code: &str, path: &Path) -> Result<()> {
    std::fs::write(path, code).context(PersistSourceSnafu { path })
}

/// A compiled benchmark executable on disk.
pub struct CompiledBenchmark {
    /// Path of the produced binary.
    bin_path: PathBuf,
    /// Program name for logging.
    name: String,
}

impl CompiledBenchmark {
    /// Persist `program` under `work_dir` and compile it with the fixed
    /// clang invocation. Existing artifacts are overwritten.
    pub fn compile(program: &RenderedProgram, work_dir: &Path) -> Result<Self> {
        let src_path = work_dir.join(program.source_file());
        let bin_path = work_dir.join(&program.name);

        persist(&program.code, &src_path)?;

        let mut command = Command::new("clang");
        command.args(CLANG_FLAGS).arg("-o").arg(&bin_path).arg(&src_path);
        tracing::info!(command = ?command, "compiling generated benchmark");

        let output = command.output().context(CompilerLaunchSnafu)?;
        ensure!(
            output.status.success(),
            CompileFailedSnafu { stderr: String::from_utf8_lossy(&output.stderr).into_owned() }
        );

        tracing::debug!(binary = %bin_path.display(), "benchmark compiled");
        Ok(Self { bin_path, name: program.name.clone() })
    }

    /// Run the compiled benchmark with no arguments and capture its stdout.
    pub fn run(&self) -> Result<String> {
        tracing::info!(binary = %self.bin_path.display(), "running benchmark");

        let output = Command::new(&self.bin_path).output().context(BinaryLaunchSnafu { path: &self.bin_path })?;
        ensure!(
            output.status.success(),
            BenchmarkFailedSnafu {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Path of the produced binary.
    pub fn bin_path(&self) -> &Path {
        &self.bin_path
    }

    /// Program name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
