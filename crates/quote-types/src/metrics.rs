use serde::{Deserialize, Serialize};

/// Physical quantities computed from one uploaded mesh.
///
/// Produced once per upload by the analyzer and replaced wholesale when a
/// new file is analyzed. Coordinates in the source file are treated as
/// millimeters, so the derived quantities are mm² and mm³; callers convert
/// to cm²/cm³/grams for display and pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshMetrics {
    /// Flat array of vertex positions [x, y, z, ...], three vertices per
    /// triangle in file order. Suitable for direct upload to a renderer.
    pub vertex_positions: Vec<f32>,
    /// Total surface area in mm². Non-negative.
    pub surface_area_mm2: f64,
    /// Enclosed volume in mm³ (absolute value of the signed sum). Only
    /// meaningful for closed, consistently wound meshes. Non-negative.
    pub volume_mm3: f64,
}

impl MeshMetrics {
    /// Number of triangles represented by `vertex_positions`.
    pub fn triangle_count(&self) -> usize {
        self.vertex_positions.len() / 9
    }

    pub fn surface_area_cm2(&self) -> f64 {
        self.surface_area_mm2 / 100.0
    }

    pub fn volume_cm3(&self) -> f64 {
        self.volume_mm3 / 1000.0
    }

    /// Implied weight for a given material density (g/cm³).
    pub fn weight_grams(&self, density_g_cm3: f64) -> f64 {
        self.volume_cm3() * density_g_cm3
    }
}
