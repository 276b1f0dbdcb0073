use chrono::{DateTime, Utc};
use serde::Serialize;

use quote_types::{Finish, Material};

use crate::Catalog;

/// Current catalog format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier stored in the file.
pub const FORMAT_NAME: &str = "printforge-catalog";

/// The top-level catalog document.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// When this catalog was last updated.
    pub updated: DateTime<Utc>,
    pub materials: Vec<Material>,
    pub finishes: Vec<Finish>,
}

/// Serialize a catalog to a pretty-printed JSON string.
pub fn save_catalog(catalog: &Catalog) -> String {
    let file = CatalogFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        updated: Utc::now(),
        materials: catalog.materials.clone(),
        finishes: catalog.finishes.clone(),
    };
    serde_json::to_string_pretty(&file).expect("catalog serialization should never fail")
}
