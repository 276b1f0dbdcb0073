use serde::{Deserialize, Serialize};

/// A printable material as configured in the shop backend.
///
/// Read-only to the quoting core; the catalog crate owns loading these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Stable identifier (catalog/backend key).
    pub id: String,
    /// User-visible display name.
    pub name: String,
    /// Material family.
    pub kind: MaterialKind,
    /// Density in g/cm³.
    pub density_g_cm3: f64,
    /// Material cost per gram of printed weight.
    pub cost_per_gram: f64,
    /// Display color (CSS hex string) for the viewer.
    pub color: String,
}

/// Material family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialKind {
    Pla,
    Petg,
    Resin,
}
