use serde::{Deserialize, Serialize};

/// Empirical printer throughput in grams of deposited material per hour.
pub const PRINT_GRAMS_PER_HOUR: f64 = 15.0;

/// Machine-time floor covering setup/cooldown regardless of object size.
pub const MIN_PRINT_HOURS: f64 = 0.5;

/// Flat prep fee for the primed finish.
pub const PRIMED_BASE_FEE: f64 = 5.0;

/// Area-proportional surcharge for the primed finish, per cm².
pub const PRIMED_RATE_PER_CM2: f64 = 0.05;

/// Fixed handling/prep hour before area-proportional painting time.
pub const PAINT_BASE_HOURS: f64 = 1.0;

/// Externally configurable rate constants for the quote engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Machine cost per print hour.
    pub hourly_rate_machine: f64,
    /// Labor cost per painting hour.
    pub hourly_rate_painting: f64,
    /// Setup fee charged once per configuration.
    pub setup_fee: f64,
    /// Painting throughput in cm² per hour.
    pub paint_speed_cm2_per_hour: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            hourly_rate_machine: 2.5,
            hourly_rate_painting: 20.0,
            setup_fee: 5.0,
            paint_speed_cm2_per_hour: 50.0,
        }
    }
}
