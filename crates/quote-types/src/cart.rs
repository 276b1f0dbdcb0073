use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Itemized cost estimate for one quote configuration.
///
/// Derived from mesh metrics plus the user's material/finish/quantity
/// selection; recomputed on every input change, never persisted on its own.
/// `material_cost`, `machine_cost` and `paint_cost` are already multiplied
/// by quantity for display; `setup_fee` is charged once per configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub material_cost: f64,
    pub machine_cost: f64,
    pub paint_cost: f64,
    pub setup_fee: f64,
    pub total: f64,
    /// Hand-painting hours per unit (0 for non-painted finishes).
    pub paint_hours: f64,
    /// Printed weight per unit in grams.
    pub weight_grams: f64,
}

/// The line item handed to the (external) cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: Uuid,
    /// Human-readable description: material and finish.
    pub description: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub weight_grams: f64,
}
