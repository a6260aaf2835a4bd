use std::error;
use std::fmt;

use async_trait::async_trait;
use model::{LatLng, RouteCandidate, TransportMode};

pub mod planner;

pub use planner::RoutePlanner;

#[derive(Debug)]
pub enum PlanError {
    /// The geocoder could not resolve a location string.
    LocationNotFound(String),
    /// The routing or geocoding provider is down or errored. Retries, if
    /// any, are the provider's responsibility.
    Provider(Box<dyn error::Error + Send + Sync>),
}

impl PlanError {
    pub fn provider<E: error::Error + Send + Sync + 'static>(why: E) -> Self {
        Self::Provider(Box::new(why))
    }
}

impl error::Error for PlanError {}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::LocationNotFound(location) => {
                write!(f, "Location not found: {}", location)
            }
            PlanError::Provider(why) => {
                write!(f, "Routing provider error: {}", why)
            }
        }
    }
}

pub type PlanResult<O> = Result<O, PlanError>;

/// Resolves free-form location text to coordinates.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, location: &str) -> PlanResult<LatLng>;
}

/// Fetches a turn-by-turn route for one transport mode. `Ok(None)` means the
/// mode has no viable route between the given points.
#[async_trait]
pub trait RouteProvider {
    async fn route(
        &self,
        mode: TransportMode,
        origin: &LatLng,
        destination: &LatLng,
    ) -> PlanResult<Option<RouteCandidate>>;
}
