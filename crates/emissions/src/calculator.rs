use indexmap::IndexMap;
use model::TransportMode;
use utility::math::round_to;

use crate::rates::{vehicle_rate, EmissionRates, DEFAULT_MODE_RATE};

/// Calculate CO2 emissions in kg for a distance and transport mode.
///
/// Non-positive distances yield exactly 0. Mode strings that are not one of
/// the supported modes use [`DEFAULT_MODE_RATE`]. The result is rounded to
/// 3 decimal places.
pub fn calculate_emission(
    rates: &EmissionRates,
    distance_km: f64,
    mode: &str,
) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }

    let rate = mode
        .parse::<TransportMode>()
        .map(|mode| rates.rate(mode))
        .unwrap_or(DEFAULT_MODE_RATE);
    let emission = round_to(distance_km * rate, 3);

    log::debug!(
        "Calculated emission for {}: {} kg CO2 for {} km",
        mode,
        emission,
        distance_km
    );
    emission
}

/// Calculate CO2 emissions in kg for a specific vehicle type and model.
///
/// Operates purely on the vehicle table keys; it is not restricted to any
/// transport mode. Unknown keys fall back through the rate table's fallback
/// chain. The result is rounded to 3 decimal places.
pub fn calculate_vehicle_emission(
    distance_km: f64,
    vehicle_type: &str,
    vehicle_model: &str,
) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }

    let rate = vehicle_rate(vehicle_type, vehicle_model);
    let emission = round_to(distance_km * rate, 3);

    log::debug!(
        "Calculated vehicle emission for {}/{}: {} kg CO2 for {} km",
        vehicle_type,
        vehicle_model,
        emission,
        distance_km
    );
    emission
}

/// Emissions for the same distance under every supported mode, in mode order.
pub fn emission_comparison(
    rates: &EmissionRates,
    distance_km: f64,
) -> IndexMap<TransportMode, f64> {
    TransportMode::ALL
        .iter()
        .map(|&mode| (mode, calculate_emission(rates, distance_km, mode.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_distance_yields_zero() {
        let rates = EmissionRates::default();
        assert_eq!(calculate_emission(&rates, 0.0, "driving"), 0.0);
        assert_eq!(calculate_emission(&rates, -5.0, "transit"), 0.0);
        assert_eq!(calculate_emission(&rates, -0.001, "nonsense"), 0.0);
        assert_eq!(calculate_vehicle_emission(0.0, "car", "electric"), 0.0);
    }

    #[test]
    fn emission_uses_mode_rate() {
        let rates = EmissionRates::default();
        assert_eq!(calculate_emission(&rates, 10.0, "driving"), 1.2);
        assert_eq!(calculate_emission(&rates, 10.0, "transit"), 0.68);
        assert_eq!(calculate_emission(&rates, 10.0, "bicycling"), 0.0);
        assert_eq!(calculate_emission(&rates, 10.0, "walking"), 0.0);
    }

    #[test]
    fn unknown_mode_uses_default_rate() {
        let rates = EmissionRates::default();
        // 0.1 kg/km, not the 0.120 vehicle default.
        assert_eq!(calculate_emission(&rates, 10.0, "hovercraft"), 1.0);
    }

    #[test]
    fn emission_is_monotonic_in_distance() {
        let rates = EmissionRates::default();
        let mut previous = 0.0;
        for step in 1..100 {
            let emission =
                calculate_emission(&rates, f64::from(step) * 0.7, "driving");
            assert!(emission > previous);
            previous = emission;
        }
    }

    #[test]
    fn vehicle_emissions_match_known_rates() {
        assert_eq!(calculate_vehicle_emission(100.0, "car", "electric"), 4.0);
        assert_eq!(calculate_vehicle_emission(50.0, "car", "hybrid"), 4.0);
        assert_eq!(
            calculate_vehicle_emission(20.0, "car", "gasoline_large"),
            5.0
        );
        assert_eq!(calculate_vehicle_emission(50.0, "transit", "bus"), 3.4);
        assert_eq!(calculate_vehicle_emission(50.0, "transit", "train"), 2.05);
        assert_eq!(calculate_vehicle_emission(30.0, "motorcycle", "small"), 2.4);
    }

    #[test]
    fn invalid_vehicle_falls_back_to_default_rate() {
        assert_eq!(
            calculate_vehicle_emission(100.0, "invalid_type", "invalid_model"),
            12.0
        );
    }

    #[test]
    fn calculation_is_idempotent() {
        let rates = EmissionRates::default();
        let first = calculate_emission(&rates, 42.5, "driving");
        let second = calculate_emission(&rates, 42.5, "driving");
        assert_eq!(first, second);
    }

    #[test]
    fn comparison_covers_all_modes_in_order() {
        let rates = EmissionRates::default();
        let comparison = emission_comparison(&rates, 10.0);
        let modes = comparison.keys().copied().collect::<Vec<_>>();
        assert_eq!(modes, TransportMode::ALL);
        assert_eq!(comparison[&TransportMode::Driving], 1.2);
        assert_eq!(comparison[&TransportMode::Walking], 0.0);
    }
}
