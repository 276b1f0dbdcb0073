use chrono::{DateTime, Utc};
use serde::Deserialize;

use quote_types::{Finish, Material};

use crate::errors::CatalogError;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};
use crate::Catalog;

/// The top-level catalog document for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFileRaw {
    pub format: String,
    pub version: u32,
    pub updated: DateTime<Utc>,
    pub materials: Vec<Material>,
    pub finishes: Vec<Finish>,
}

/// Deserialize a catalog from a JSON string.
///
/// Validates the format identifier and version.
pub fn load_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let raw: CatalogFileRaw =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(CatalogError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(CatalogError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    // Migrations are applied sequentially as the format evolves. Version 1
    // is the only version so far, so any older version is unreachable.
    if raw.version < FORMAT_VERSION {
        return Err(CatalogError::MigrationFailed {
            from: raw.version,
            to: FORMAT_VERSION,
            reason: format!(
                "no migration path from v{} to v{}",
                raw.version, FORMAT_VERSION
            ),
        });
    }

    Ok(Catalog {
        materials: raw.materials,
        finishes: raw.finishes,
    })
}
