use model::LatLng;

use crate::model::geocode::GeocodeResponse;
use crate::{ApiError, OrsClient};

impl OrsClient {
    /// Resolve location text to coordinates using the Pelias search
    /// endpoint. Only the best match is requested.
    pub async fn geocode(&self, location: &str) -> Result<LatLng, ApiError> {
        log::info!("Geocoding location: {location}");

        let response: GeocodeResponse = self
            .get(
                "geocode/search",
                &[("text", location.to_owned()), ("size", "1".to_owned())],
            )
            .await?;

        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::LocationNotFound(location.to_owned()))?;

        let [longitude, latitude] = feature.geometry.coordinates;
        Ok(LatLng::new(latitude, longitude))
    }
}
