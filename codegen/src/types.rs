//! Types for code generation.

/// A rendered benchmark program ready for compilation and execution.
#[derive(Debug, Clone)]
pub struct RenderedProgram {
    /// The generated C source.
    pub code: String,

    /// Base name for the source file and the compiled binary.
    pub name: String,

    /// Partition count baked into the unrolled loop.
    pub partitions: u64,

    /// Element count of the benchmark arrays.
    pub array_size: u64,
}

impl RenderedProgram {
    /// Create a new rendered program.
    pub fn new(code: String, name: String, partitions: u64, array_size: u64) -> Self {
        Self { code, name, partitions, array_size }
    }

    /// File name the source is persisted under.
    pub fn source_file(&self) -> String {
        format!("{}.c", self.name)
    }
}
