//! Test harness for the quoting core.
//!
//! Provides triangle-soup builders with known closed-form quantities and a
//! binary STL fixture encoder, so scenario tests can feed the analyzer real
//! byte buffers instead of hand-rolled arrays.
//!
//! # Key Components
//!
//! - [`meshes`] — cube/tetrahedron soups, winding flips, open surfaces
//! - [`stl`] — binary STL encoding and corruption helpers

pub mod meshes;
pub mod stl;

pub use meshes::Triangle;
