use model::{EmissionRating, ImpactMetrics};
use utility::math::round_to;

// Offset equivalences based on EPA figures.
const TREE_OFFSET_KG_PER_YEAR: f64 = 21.77;
const CAR_KG_PER_MILE: f64 = 0.404;
const SMARTPHONE_CHARGE_KG: f64 = 0.0084;
const LIGHT_BULB_HOUR_KG: f64 = 0.0006;

/// Derive comparative impact metrics from an emission quantity.
pub fn environmental_impact(emission_kg: f64) -> ImpactMetrics {
    ImpactMetrics {
        trees_needed: round_to(emission_kg / TREE_OFFSET_KG_PER_YEAR, 2),
        car_miles_equivalent: round_to(emission_kg / CAR_KG_PER_MILE, 2),
        smartphone_charges: round_to(emission_kg / SMARTPHONE_CHARGE_KG, 0),
        light_bulb_hours: round_to(emission_kg / LIGHT_BULB_HOUR_KG, 0),
    }
}

/// Bucket a route's per-km emission into a letter rating.
///
/// A per-km emission of exactly 0 is checked first so that zero-emission
/// routes always rate `A+` instead of landing in the `< 0.05` bucket.
pub fn emission_rating(emission_kg: f64, distance_km: f64) -> EmissionRating {
    if distance_km <= 0.0 {
        return EmissionRating::NotAvailable;
    }

    let per_km = emission_kg / distance_km;
    if per_km == 0.0 {
        EmissionRating::APlus
    } else if per_km < 0.05 {
        EmissionRating::A
    } else if per_km < 0.10 {
        EmissionRating::B
    } else if per_km < 0.15 {
        EmissionRating::C
    } else if per_km < 0.20 {
        EmissionRating::D
    } else {
        EmissionRating::E
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_emission_yields_zero_metrics() {
        let impact = environmental_impact(0.0);
        assert_eq!(impact.trees_needed, 0.0);
        assert_eq!(impact.car_miles_equivalent, 0.0);
        assert_eq!(impact.smartphone_charges, 0.0);
        assert_eq!(impact.light_bulb_hours, 0.0);
    }

    #[test]
    fn metrics_use_fixed_equivalences() {
        let impact = environmental_impact(21.77);
        assert_eq!(impact.trees_needed, 1.0);
        assert_eq!(impact.car_miles_equivalent, 53.89);
        assert_eq!(impact.smartphone_charges, 2592.0);
        assert_eq!(impact.light_bulb_hours, 36283.0);
    }

    #[test]
    fn zero_per_km_rates_a_plus() {
        assert_eq!(emission_rating(0.0, 10.0), EmissionRating::APlus);
    }

    #[test]
    fn undefined_distance_rates_not_available() {
        assert_eq!(emission_rating(1.5, 0.0), EmissionRating::NotAvailable);
        assert_eq!(emission_rating(0.0, 0.0), EmissionRating::NotAvailable);
        assert_eq!(emission_rating(3.0, -2.0), EmissionRating::NotAvailable);
    }

    #[test]
    fn buckets_have_exclusive_upper_bounds() {
        assert_eq!(emission_rating(0.4, 10.0), EmissionRating::A); // 0.04
        assert_eq!(emission_rating(0.5, 10.0), EmissionRating::B); // 0.05
        assert_eq!(emission_rating(0.68, 10.0), EmissionRating::B); // transit
        assert_eq!(emission_rating(1.0, 10.0), EmissionRating::C); // 0.10
        assert_eq!(emission_rating(1.2, 10.0), EmissionRating::C); // driving
        assert_eq!(emission_rating(1.5, 10.0), EmissionRating::D); // 0.15
        assert_eq!(emission_rating(2.0, 10.0), EmissionRating::E); // 0.20
        assert_eq!(emission_rating(5.0, 10.0), EmissionRating::E);
    }

    #[test]
    fn rating_descriptions_are_fixed() {
        assert_eq!(
            emission_rating(0.0, 0.0).description(),
            "No emissions data available"
        );
        assert_eq!(
            emission_rating(0.0, 5.0).description(),
            "Zero emissions - excellent environmental choice!"
        );
    }
}
