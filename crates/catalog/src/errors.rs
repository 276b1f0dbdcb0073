/// Errors during catalog loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("unknown catalog format: {0}")]
    UnknownFormat(String),

    #[error("catalog version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}
