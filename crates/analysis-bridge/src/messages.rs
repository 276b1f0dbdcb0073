use serde::{Deserialize, Serialize};

use quote_types::MeshMetrics;

/// Events published by an analysis task to the owning view.
///
/// Serialized as tagged JSON for transports that need it. Every event
/// carries the generation of the upload that produced it; consumers apply
/// events through [`crate::QuoteSession::apply`], which discards stale
/// generations.
///
/// Per generation: zero or more `Progress` events with non-decreasing
/// `bytes_loaded`, then exactly one terminal `Complete` or `Failed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    Progress {
        generation: u64,
        bytes_loaded: u64,
        bytes_total: Option<u64>,
    },
    Complete {
        generation: u64,
        metrics: MeshMetrics,
    },
    Failed {
        generation: u64,
        kind: FailureKind,
        message: String,
    },
}

impl SessionEvent {
    /// The upload generation this event belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            SessionEvent::Progress { generation, .. }
            | SessionEvent::Complete { generation, .. }
            | SessionEvent::Failed { generation, .. } => *generation,
        }
    }

    /// Whether this is the last event of its generation.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionEvent::Progress { .. })
    }
}

/// Why an analysis failed, for UI messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FailureKind {
    /// Download failed; surfaced as "retry upload".
    Network,
    /// Declared triangle count exceeds the available bytes; surfaced as
    /// "file appears corrupted, re-export and retry".
    CorruptMesh,
    /// Not a binary STL (ASCII variant detected).
    UnsupportedFormat,
    /// The session moved on before the analysis finished.
    Cancelled,
}
