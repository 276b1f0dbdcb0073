//! Upload-session orchestration.
//!
//! Drives one custom-print quoting session: fetch the uploaded mesh bytes,
//! analyze them off the caller's thread, and publish a typed event stream
//! (progress / complete / failed). A generation counter guarantees that a
//! stale analysis can never overwrite the metrics of a newer upload.

pub mod error;
pub mod messages;
pub mod session;

pub use error::SessionError;
pub use messages::{FailureKind, SessionEvent};
pub use session::QuoteSession;
