use futures::future::join_all;
use model::{RouteCandidate, TransportMode};

use crate::{Geocoder, PlanResult, RouteProvider};

/// Orchestrates geocoding and per-mode route fetching.
///
/// Holds no mutable state; one instance serves all requests.
pub struct RoutePlanner<G, P> {
    geocoder: G,
    provider: P,
}

impl<G, P> RoutePlanner<G, P>
where
    G: Geocoder,
    P: RouteProvider,
{
    pub fn new(geocoder: G, provider: P) -> Self {
        Self { geocoder, provider }
    }

    /// Geocode both endpoints and fetch one candidate per supported mode.
    ///
    /// The per-mode requests are independent and issued concurrently;
    /// candidates come back in mode order. A failed mode request only costs
    /// that mode its candidate, so the result may legitimately be empty.
    /// Geocoding failures propagate.
    pub async fn find_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> PlanResult<Vec<RouteCandidate>> {
        let origin_coords = self.geocoder.geocode(origin).await?;
        let destination_coords = self.geocoder.geocode(destination).await?;

        log::info!("Finding routes from '{}' to '{}'.", origin, destination);

        let requests = TransportMode::ALL.iter().map(|&mode| {
            self.provider
                .route(mode, &origin_coords, &destination_coords)
        });
        let results = join_all(requests).await;

        let mut candidates = Vec::new();
        for (mode, result) in TransportMode::ALL.into_iter().zip(results) {
            match result {
                Ok(Some(candidate)) => candidates.push(candidate),
                Ok(None) => log::warn!("No route found for mode: {}", mode),
                Err(why) => {
                    log::warn!("Route request failed for mode {}: {}", mode, why)
                }
            }
        }

        log::info!("Found {} routes.", candidates.len());
        Ok(candidates)
    }
}
