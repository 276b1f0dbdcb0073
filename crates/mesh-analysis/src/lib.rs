//! Binary STL ingestion and quantity estimation.
//!
//! Turns the raw bytes of an uploaded binary STL file into [`MeshMetrics`]:
//! a renderable flat vertex array, total surface area, and enclosed volume.
//!
//! The volume computation assumes a closed, consistently wound mesh; open
//! meshes still analyze but their volume is best-effort. Use
//! [`diagnostics::boundary_edge_count`] to detect that case.

pub mod diagnostics;
pub mod error;
pub mod stl;

pub use error::AnalyzeError;
pub use quote_types::MeshMetrics;
pub use stl::analyze;
