use quote_types::{Finish, FinishKind, Material, QuoteBreakdown};

use crate::config::{
    PricingConfig, MIN_PRINT_HOURS, PAINT_BASE_HOURS, PRIMED_BASE_FEE, PRIMED_RATE_PER_CM2,
    PRINT_GRAMS_PER_HOUR,
};

/// Compute an itemized quote for printing `quantity` copies.
///
/// Inputs are the analyzer's mm-scale quantities plus the user's selections
/// and the shop's rate constants. Quantity is clamped to at least 1.
///
/// Reported `material_cost`, `machine_cost` and `paint_cost` are multiplied
/// by quantity; `setup_fee` is the once-per-configuration constant.
/// `paint_hours` and `weight_grams` are per-unit figures.
pub fn quote(
    volume_mm3: f64,
    surface_area_mm2: f64,
    material: &Material,
    finish: FinishKind,
    quantity: u32,
    config: &PricingConfig,
) -> QuoteBreakdown {
    let quantity = quantity.max(1);

    let volume_cm3 = volume_mm3 / 1000.0;
    let surface_cm2 = surface_area_mm2 / 100.0;

    let weight_grams = volume_cm3 * material.density_g_cm3;
    let material_cost = weight_grams * material.cost_per_gram;

    let print_hours = (weight_grams / PRINT_GRAMS_PER_HOUR).max(MIN_PRINT_HOURS);
    let machine_cost = print_hours * config.hourly_rate_machine;

    let (paint_cost, paint_hours) = match finish {
        FinishKind::Painted => {
            let hours = PAINT_BASE_HOURS + surface_cm2 / config.paint_speed_cm2_per_hour;
            (hours * config.hourly_rate_painting, hours)
        }
        FinishKind::Primed => (PRIMED_BASE_FEE + surface_cm2 * PRIMED_RATE_PER_CM2, 0.0),
        FinishKind::Raw => (0.0, 0.0),
    };

    let unit_subtotal = material_cost + machine_cost + paint_cost + config.setup_fee;
    let quantity_f = f64::from(quantity);

    QuoteBreakdown {
        material_cost: material_cost * quantity_f,
        machine_cost: machine_cost * quantity_f,
        paint_cost: paint_cost * quantity_f,
        setup_fee: config.setup_fee,
        total: unit_subtotal * quantity_f,
        paint_hours,
        weight_grams,
    }
}

/// The cart line-item description for a material/finish pairing.
pub fn describe(material: &Material, finish: &Finish) -> String {
    format!("{} / {}", material.name, finish.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use quote_types::MaterialKind;

    fn pla() -> Material {
        Material {
            id: "pla-grey".to_string(),
            name: "PLA, grey".to_string(),
            kind: MaterialKind::Pla,
            density_g_cm3: 1.24,
            cost_per_gram: 0.15,
            color: "#9e9e9e".to_string(),
        }
    }

    fn shop_rates() -> PricingConfig {
        PricingConfig {
            hourly_rate_machine: 2.5,
            hourly_rate_painting: 20.0,
            setup_fee: 5.0,
            paint_speed_cm2_per_hour: 50.0,
        }
    }

    /// The 10mm-cube reference scenario: volume 1000 mm³, area 600 mm².
    #[test]
    fn ten_millimeter_cube_raw_quote() {
        let breakdown = quote(1000.0, 600.0, &pla(), FinishKind::Raw, 1, &shop_rates());

        assert_relative_eq!(breakdown.weight_grams, 1.24, max_relative = 1e-12);
        assert_relative_eq!(breakdown.material_cost, 0.186, max_relative = 1e-12);
        // 1.24 g at 15 g/h is under the half-hour floor.
        assert_relative_eq!(breakdown.machine_cost, 0.5 * 2.5, max_relative = 1e-12);
        assert_eq!(breakdown.paint_cost, 0.0);
        assert_eq!(breakdown.paint_hours, 0.0);
        assert_eq!(breakdown.setup_fee, 5.0);
        assert_relative_eq!(breakdown.total, 6.436, max_relative = 1e-9);
    }

    #[test]
    fn painted_finish_charges_base_hour_plus_area() {
        let breakdown = quote(1000.0, 600.0, &pla(), FinishKind::Painted, 1, &shop_rates());
        // 1 base hour + 6 cm² / 50 cm²/h.
        assert_relative_eq!(breakdown.paint_hours, 1.12, max_relative = 1e-12);
        assert_relative_eq!(breakdown.paint_cost, 1.12 * 20.0, max_relative = 1e-12);
    }

    #[test]
    fn primed_finish_charges_flat_fee_plus_surcharge() {
        let breakdown = quote(1000.0, 600.0, &pla(), FinishKind::Primed, 1, &shop_rates());
        assert_relative_eq!(breakdown.paint_cost, 5.0 + 6.0 * 0.05, max_relative = 1e-12);
        assert_eq!(breakdown.paint_hours, 0.0);
    }

    #[test]
    fn quote_is_idempotent() {
        let a = quote(12345.6, 7890.1, &pla(), FinishKind::Painted, 3, &shop_rates());
        let b = quote(12345.6, 7890.1, &pla(), FinishKind::Painted, 3, &shop_rates());
        assert_eq!(a, b);
    }

    #[test]
    fn zero_quantity_is_clamped_to_one() {
        let one = quote(1000.0, 600.0, &pla(), FinishKind::Raw, 1, &shop_rates());
        let zero = quote(1000.0, 600.0, &pla(), FinishKind::Raw, 0, &shop_rates());
        assert_eq!(one, zero);
    }

    #[test]
    fn tiny_weight_hits_machine_time_floor() {
        // 0.01 g would be ~2.4 seconds of printing; the floor applies.
        let breakdown = quote(
            0.01 / 1.24 * 1000.0,
            1.0,
            &pla(),
            FinishKind::Raw,
            1,
            &shop_rates(),
        );
        assert_relative_eq!(
            breakdown.machine_cost,
            MIN_PRINT_HOURS * 2.5,
            max_relative = 1e-12
        );
    }

    proptest! {
        /// Adding one unit grows the total by exactly the unit subtotal.
        #[test]
        fn quantity_monotonicity(
            volume in 1.0f64..1e7,
            area in 1.0f64..1e7,
            quantity in 1u32..500,
        ) {
            let config = shop_rates();
            let material = pla();
            let q1 = quote(volume, area, &material, FinishKind::Painted, quantity, &config);
            let q2 = quote(volume, area, &material, FinishKind::Painted, quantity + 1, &config);
            let unit_subtotal = q1.total / f64::from(quantity);
            prop_assert!(q2.total > q1.total);
            prop_assert!((q2.total - q1.total - unit_subtotal).abs() <= 1e-9 * unit_subtotal);
        }

        /// Every monetary figure is non-negative over the numeric domain.
        #[test]
        fn costs_are_non_negative(
            volume in 0.0f64..1e9,
            area in 0.0f64..1e9,
            quantity in 0u32..1000,
        ) {
            let b = quote(volume, area, &pla(), FinishKind::Painted, quantity, &shop_rates());
            prop_assert!(b.material_cost >= 0.0);
            prop_assert!(b.machine_cost >= 0.0);
            prop_assert!(b.paint_cost >= 0.0);
            prop_assert!(b.setup_fee >= 0.0);
            prop_assert!(b.total >= 0.0);
            prop_assert!(b.paint_hours >= 0.0);
            prop_assert!(b.weight_grams >= 0.0);
        }
    }
}
