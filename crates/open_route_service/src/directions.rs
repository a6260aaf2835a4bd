use model::{LatLng, RouteCandidate, TransportMode};
use utility::math::round_to;

use crate::model::directions::DirectionsResponse;
use crate::{ApiError, OrsClient};

/// OpenRouteService directions profile for a transport mode.
///
/// Transit has no directions profile; transit routes never come from this
/// provider.
pub fn profile(mode: TransportMode) -> Option<&'static str> {
    match mode {
        TransportMode::Driving => Some("driving-car"),
        TransportMode::Bicycling => Some("cycling-regular"),
        TransportMode::Walking => Some("foot-walking"),
        TransportMode::Transit => None,
    }
}

impl OrsClient {
    /// Fetch the route for one transport mode, or `None` when the mode has
    /// no profile or no viable route.
    pub async fn directions(
        &self,
        mode: TransportMode,
        origin: &LatLng,
        destination: &LatLng,
    ) -> Result<Option<RouteCandidate>, ApiError> {
        let Some(profile) = profile(mode) else {
            return Ok(None);
        };

        log::info!("Getting route for mode: {mode}");

        let response: DirectionsResponse = self
            .get(
                &format!("v2/directions/{profile}"),
                &[
                    (
                        "start",
                        format!("{},{}", origin.longitude, origin.latitude),
                    ),
                    (
                        "end",
                        format!("{},{}", destination.longitude, destination.latitude),
                    ),
                ],
            )
            .await?;

        let Some(feature) = response.features.into_iter().next() else {
            log::warn!("No route found for mode: {mode}");
            return Ok(None);
        };
        let Some(segment) = feature.properties.segments.first() else {
            log::warn!("Route for mode {mode} has no segments.");
            return Ok(None);
        };

        let distance_km = round_to(segment.distance / 1000.0, 2);
        let duration_secs = segment.duration.round() as u32;
        // GeoJSON is [lon, lat]; the rest of the system works lat-first.
        let geometry = feature
            .geometry
            .coordinates
            .iter()
            .map(|&[longitude, latitude]| LatLng::new(latitude, longitude))
            .collect();

        Ok(Some(RouteCandidate {
            mode,
            distance_km,
            duration_secs,
            geometry,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_except_transit_has_a_profile() {
        assert_eq!(profile(TransportMode::Driving), Some("driving-car"));
        assert_eq!(profile(TransportMode::Bicycling), Some("cycling-regular"));
        assert_eq!(profile(TransportMode::Walking), Some("foot-walking"));
        assert_eq!(profile(TransportMode::Transit), None);
    }
}
