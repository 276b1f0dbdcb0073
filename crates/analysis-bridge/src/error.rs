/// Errors from the session layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("unknown material: {id}")]
    UnknownMaterial { id: String },

    #[error("unknown finish: {id}")]
    UnknownFinish { id: String },
}
