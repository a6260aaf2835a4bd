use std::error;
use std::fmt;

pub mod calculator;
pub mod impact;
pub mod modes;
pub mod ranker;
pub mod rates;
pub mod vehicles;

pub use calculator::{calculate_emission, calculate_vehicle_emission};
pub use impact::{emission_rating, environmental_impact};
pub use ranker::rank_routes;
pub use rates::EmissionRates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The provider produced no candidates at all. A caller-visible failure,
    /// never silently treated as an empty success.
    NoRoutesFound,
}

impl error::Error for RankError {}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RankError::NoRoutesFound => write!(
                f,
                "No routes found between the given locations. \
                 Please check the locations and try again."
            ),
        }
    }
}
