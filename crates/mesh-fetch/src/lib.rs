//! Byte retrieval for uploaded mesh files.
//!
//! Fetches the full contents of a mesh file from a local path or an HTTP
//! URL without blocking the caller, reporting download progress along the
//! way. Transfers are cooperatively cancellable so an abandoned upload
//! session stops doing work.

pub mod cancel;
pub mod error;
pub mod fetch;

pub use cancel::CancelToken;
pub use error::FetchError;
pub use fetch::{fetch, MeshSource, Progress};
