use schemars::JsonSchema;
use serde::Serialize;

/// Comparative environmental-impact figures derived from an emission
/// quantity. Purely a function of the emission, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    /// Trees needed for a year to offset the emission.
    pub trees_needed: f64,
    /// Equivalent distance driven by an average car, in miles.
    pub car_miles_equivalent: f64,
    pub smartphone_charges: f64,
    pub light_bulb_hours: f64,
}

/// Qualitative per-kilometre emission rating, ordered from best to worst.
/// `NotAvailable` covers routes without a usable distance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, JsonSchema,
)]
pub enum EmissionRating {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl EmissionRating {
    pub fn label(&self) -> &'static str {
        match self {
            EmissionRating::APlus => "A+",
            EmissionRating::A => "A",
            EmissionRating::B => "B",
            EmissionRating::C => "C",
            EmissionRating::D => "D",
            EmissionRating::E => "E",
            EmissionRating::NotAvailable => "N/A",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmissionRating::APlus => {
                "Zero emissions - excellent environmental choice!"
            }
            EmissionRating::A => "Very low emissions - great for the environment",
            EmissionRating::B => "Low emissions - good environmental choice",
            EmissionRating::C => {
                "Moderate emissions - consider greener alternatives"
            }
            EmissionRating::D => "High emissions - better alternatives available",
            EmissionRating::E => {
                "Very high emissions - consider sustainable alternatives"
            }
            EmissionRating::NotAvailable => "No emissions data available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_ordered_best_to_worst() {
        assert!(EmissionRating::APlus < EmissionRating::A);
        assert!(EmissionRating::A < EmissionRating::E);
        assert!(EmissionRating::E < EmissionRating::NotAvailable);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&EmissionRating::APlus).unwrap(),
            "\"A+\""
        );
        assert_eq!(
            serde_json::to_string(&EmissionRating::NotAvailable).unwrap(),
            "\"N/A\""
        );
    }
}
