/// Errors from mesh analysis.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzeError {
    #[error("buffer too short for STL header: expected at least {expected} bytes, got {got}")]
    TruncatedHeader { expected: usize, got: usize },

    #[error(
        "corrupt mesh: {declared} triangles declared, requires {required} bytes, buffer has {actual}"
    )]
    CorruptMesh {
        declared: u32,
        required: usize,
        actual: usize,
    },

    #[error("unsupported format: buffer looks like an ASCII STL variant")]
    UnsupportedFormat,
}
