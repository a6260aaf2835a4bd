use serde::Deserialize;

/// GeoJSON response of the `v2/directions/{profile}` endpoint, reduced to
/// the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<DirectionsFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsFeature {
    pub properties: DirectionsProperties,
    pub geometry: LineGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsProperties {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineGeometry {
    /// `[longitude, latitude]` pairs, GeoJSON axis order.
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions_response() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "segments": [
                            { "distance": 9461.3, "duration": 902.4, "steps": [] }
                        ],
                        "summary": { "distance": 9461.3, "duration": 902.4 }
                    },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[10.1228, 54.3233], [10.2333, 54.2833]]
                    }
                }
            ]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let feature = &response.features[0];
        assert_eq!(feature.properties.segments[0].distance, 9461.3);
        assert_eq!(feature.properties.segments[0].duration, 902.4);
        assert_eq!(feature.geometry.coordinates.len(), 2);
    }

    #[test]
    fn empty_feature_collection_parses() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{ "features": [] }"#).unwrap();
        assert!(response.features.is_empty());
    }
}
