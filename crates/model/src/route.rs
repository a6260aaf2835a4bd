use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ExampleData, TransportMode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A raw route as returned by the external directions provider.
/// Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub duration_secs: u32,
    pub geometry: Vec<LatLng>,
}

/// A route candidate annotated with its computed emission data.
///
/// Within a result list the ordering (ascending by `emission_kg`) is part of
/// the contract, not an implementation detail.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRoute {
    #[serde(flatten)]
    pub candidate: RouteCandidate,

    pub emission_kg: f64,
    pub emission_per_km: f64,

    /// Display name of the selected vehicle, set only for driving routes
    /// computed with a vehicle selector.
    pub vehicle_name: Option<String>,
    pub vehicle_rate_label: Option<String>,

    /// Emission saved compared to the driving route. Only ever set on the
    /// globally best route, and only when that route is not driving.
    pub emission_savings_kg: Option<f64>,
}

impl AnnotatedRoute {
    pub fn mode(&self) -> TransportMode {
        self.candidate.mode
    }

    pub fn distance_km(&self) -> f64 {
        self.candidate.distance_km
    }
}

/// The outcome of ranking a set of route candidates. `best` equals the first
/// element of `routes`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedRoutes {
    pub best: AnnotatedRoute,
    pub routes: Vec<AnnotatedRoute>,
}

impl ExampleData for RouteCandidate {
    fn example_data() -> Self {
        Self {
            mode: TransportMode::Bicycling,
            distance_km: 6.4,
            duration_secs: 1460,
            geometry: vec![
                LatLng::new(54.3233, 10.1228),
                LatLng::new(54.3396, 10.1528),
            ],
        }
    }
}

impl ExampleData for AnnotatedRoute {
    fn example_data() -> Self {
        Self {
            candidate: RouteCandidate::example_data(),
            emission_kg: 0.0,
            emission_per_km: 0.0,
            vehicle_name: None,
            vehicle_rate_label: None,
            emission_savings_kg: Some(0.768),
        }
    }
}

impl ExampleData for RankedRoutes {
    fn example_data() -> Self {
        let best = AnnotatedRoute::example_data();
        Self {
            best: best.clone(),
            routes: vec![best],
        }
    }
}
