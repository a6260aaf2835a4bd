use std::env;

use model::TransportMode;
use phf::phf_map;

/// Rate applied when a mode string is not one of the supported modes.
///
/// Deliberately different from [`DEFAULT_VEHICLE_RATE`]; the two defaults
/// come from different lookup policies and must not be unified.
pub const DEFAULT_MODE_RATE: f64 = 0.1;

/// Rate applied when a vehicle type is not in the vehicle table
/// (the "average car" rate).
pub const DEFAULT_VEHICLE_RATE: f64 = 0.120;

/// Inner table key holding a vehicle type's fallback rate.
pub const AVERAGE_MODEL: &str = "average";

/// Base CO2 emission rates in kg per km for each transport mode.
///
/// Constructed once at startup and passed by reference into calculation and
/// ranking calls; the tables never change at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRates {
    pub driving: f64,
    pub transit: f64,
    pub bicycling: f64,
    pub walking: f64,
}

impl Default for EmissionRates {
    fn default() -> Self {
        Self {
            driving: 0.120,
            transit: 0.068,
            bicycling: 0.0,
            walking: 0.0,
        }
    }
}

impl EmissionRates {
    /// Default rates with optional `EMISSION_RATE_*` environment overrides.
    pub fn from_env() -> Self {
        let mut rates = Self::default();
        rates.driving = env_rate("EMISSION_RATE_DRIVING").unwrap_or(rates.driving);
        rates.transit = env_rate("EMISSION_RATE_TRANSIT").unwrap_or(rates.transit);
        rates.bicycling =
            env_rate("EMISSION_RATE_BICYCLING").unwrap_or(rates.bicycling);
        rates.walking = env_rate("EMISSION_RATE_WALKING").unwrap_or(rates.walking);
        log::info!("Emission rates initialized: {:?}", rates);
        rates
    }

    pub fn rate(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Driving => self.driving,
            TransportMode::Transit => self.transit,
            TransportMode::Bicycling => self.bicycling,
            TransportMode::Walking => self.walking,
        }
    }
}

fn env_rate(variable: &str) -> Option<f64> {
    env::var(variable).ok().and_then(|value| value.parse().ok())
}

static CAR_RATES: phf::Map<&'static str, f64> = phf_map! {
    "gasoline_small" => 0.120,
    "gasoline_medium" => 0.180,
    "gasoline_large" => 0.250,
    "diesel_small" => 0.140,
    "diesel_medium" => 0.200,
    "hybrid" => 0.080,
    "electric" => 0.040,
    "electric_renewable" => 0.010,
    "average" => 0.120,
};

static MOTORCYCLE_RATES: phf::Map<&'static str, f64> = phf_map! {
    "small" => 0.080,
    "medium" => 0.120,
    "large" => 0.180,
    "electric" => 0.020,
    "average" => 0.120,
};

static TRANSIT_RATES: phf::Map<&'static str, f64> = phf_map! {
    "bus" => 0.068,
    "train" => 0.041,
    "subway" => 0.035,
    "tram" => 0.030,
    "average" => 0.068,
};

static TRUCK_RATES: phf::Map<&'static str, f64> = phf_map! {
    "small" => 0.200,
    "medium" => 0.350,
    "large" => 0.500,
    "average" => 0.350,
};

/// Per-vehicle emission rates in kg CO2 per km. Rates for transit vehicles
/// are per passenger.
static VEHICLE_RATES: phf::Map<&'static str, &'static phf::Map<&'static str, f64>> = phf_map! {
    "car" => &CAR_RATES,
    "motorcycle" => &MOTORCYCLE_RATES,
    "transit" => &TRANSIT_RATES,
    "truck" => &TRUCK_RATES,
};

/// Look up the rate for a vehicle type and model with the explicit fallback
/// chain: model entry, then the type's `average` entry, then
/// [`DEFAULT_VEHICLE_RATE`].
pub fn vehicle_rate(vehicle_type: &str, vehicle_model: &str) -> f64 {
    match VEHICLE_RATES.get(vehicle_type) {
        Some(models) => models
            .get(vehicle_model)
            .or_else(|| models.get(AVERAGE_MODEL))
            .copied()
            .unwrap_or(DEFAULT_VEHICLE_RATE),
        None => DEFAULT_VEHICLE_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_match_mode_table() {
        let rates = EmissionRates::default();
        assert_eq!(rates.rate(TransportMode::Driving), 0.120);
        assert_eq!(rates.rate(TransportMode::Transit), 0.068);
        assert_eq!(rates.rate(TransportMode::Bicycling), 0.0);
        assert_eq!(rates.rate(TransportMode::Walking), 0.0);
    }

    #[test]
    fn vehicle_rate_uses_exact_model_entry() {
        assert_eq!(vehicle_rate("car", "electric"), 0.040);
        assert_eq!(vehicle_rate("transit", "tram"), 0.030);
        assert_eq!(vehicle_rate("truck", "large"), 0.500);
    }

    #[test]
    fn unknown_model_falls_back_to_type_average() {
        assert_eq!(vehicle_rate("car", "steam_powered"), 0.120);
        assert_eq!(vehicle_rate("truck", "steam_powered"), 0.350);
    }

    #[test]
    fn unknown_type_falls_back_to_default_rate() {
        assert_eq!(vehicle_rate("hovercraft", "average"), DEFAULT_VEHICLE_RATE);
    }

    #[test]
    fn every_type_has_an_average_entry() {
        for (_, models) in VEHICLE_RATES.entries() {
            assert!(models.contains_key(AVERAGE_MODEL));
        }
    }

    #[test]
    fn mode_and_vehicle_defaults_stay_distinct() {
        assert_ne!(DEFAULT_MODE_RATE, DEFAULT_VEHICLE_RATE);
    }
}
