use async_trait::async_trait;
use model::{LatLng, RouteCandidate, TransportMode};
use routing::{Geocoder, PlanError, PlanResult, RouteProvider};

use crate::{ApiError, OrsClient};

fn to_plan_error(why: ApiError) -> PlanError {
    match why {
        ApiError::LocationNotFound(location) => {
            PlanError::LocationNotFound(location)
        }
        other => PlanError::provider(other),
    }
}

#[async_trait]
impl Geocoder for OrsClient {
    async fn geocode(&self, location: &str) -> PlanResult<LatLng> {
        OrsClient::geocode(self, location)
            .await
            .map_err(to_plan_error)
    }
}

#[async_trait]
impl RouteProvider for OrsClient {
    async fn route(
        &self,
        mode: TransportMode,
        origin: &LatLng,
        destination: &LatLng,
    ) -> PlanResult<Option<RouteCandidate>> {
        self.directions(mode, origin, destination)
            .await
            .map_err(to_plan_error)
    }
}
