use serde::Deserialize;

/// Response of the Pelias `geocode/search` endpoint, reduced to the fields
/// we read.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: PointGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    /// `[longitude, latitude]`, GeoJSON axis order.
    pub coordinates: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let json = r#"{
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [10.1228, 54.3233] },
                    "properties": { "label": "Kiel, Germany" }
                }
            ]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.features.len(), 1);
        assert_eq!(response.features[0].geometry.coordinates, [10.1228, 54.3233]);
    }

    #[test]
    fn missing_features_parse_as_empty() {
        let response: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.features.is_empty());
    }
}
