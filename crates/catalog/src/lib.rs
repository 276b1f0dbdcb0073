//! Material and finish catalog.
//!
//! The storefront backend serves the printable materials and finish options
//! as a versioned JSON document; this crate loads, validates and saves that
//! document, and ships the built-in defaults used until the backend answers.

pub mod builtin;
pub mod errors;
pub mod load;
pub mod save;

use quote_types::{Finish, Material};

pub use builtin::builtin_catalog;
pub use errors::CatalogError;
pub use load::load_catalog;
pub use save::{save_catalog, FORMAT_VERSION};

/// The materials and finishes offered for custom prints.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub materials: Vec<Material>,
    pub finishes: Vec<Finish>,
}

impl Catalog {
    /// Look up a material by its catalog id.
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a finish by its catalog id.
    pub fn finish(&self, id: &str) -> Option<&Finish> {
        self.finishes.iter().find(|f| f.id == id)
    }
}
