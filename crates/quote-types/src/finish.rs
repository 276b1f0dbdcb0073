use serde::{Deserialize, Serialize};

/// A surface finish option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finish {
    /// Stable identifier (catalog/backend key).
    pub id: String,
    /// User-visible display name.
    pub name: String,
    pub kind: FinishKind,
}

/// The fixed set of finish kinds, each with its own cost formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FinishKind {
    /// As-printed, no post-processing.
    Raw,
    /// Sanded and primed, no painting.
    Primed,
    /// Hand-painted.
    Painted,
}

impl FinishKind {
    /// Whether this finish involves hand-painting labor.
    pub fn requires_painting(&self) -> bool {
        matches!(self, FinishKind::Painted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_painted_requires_painting() {
        assert!(!FinishKind::Raw.requires_painting());
        assert!(!FinishKind::Primed.requires_painting());
        assert!(FinishKind::Painted.requires_painting());
    }
}
