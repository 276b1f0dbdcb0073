//! Quote derivation from mesh quantities.
//!
//! A pure function from (volume, surface area, material, finish, quantity,
//! rates) to an itemized [`QuoteBreakdown`]. The engine never fails; callers
//! gate on `volume_mm3 > 0` before invoking it.

pub mod config;
pub mod quote;

pub use config::PricingConfig;
pub use quote::{describe, quote};
