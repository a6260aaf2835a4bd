use axum::{
    extract::{Query, State},
    Json,
};
use emissions::{calculator::emission_comparison, emission_rating};
use model::{EmissionRating, TransportMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::WebState;

#[derive(Debug, Deserialize)]
pub(crate) struct CompareQuery {
    distance: f64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModeEmissionDto {
    mode: TransportMode,
    emission_kg: f64,
    rating: EmissionRating,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompareResponse {
    distance_km: f64,
    emissions: Vec<ModeEmissionDto>,
}

/// Emissions for one distance under every supported mode, in mode order.
pub(crate) async fn compare(
    State(WebState { rates, .. }): State<WebState>,
    Query(query): Query<CompareQuery>,
) -> Json<CompareResponse> {
    let emissions = emission_comparison(&rates, query.distance)
        .into_iter()
        .map(|(mode, emission_kg)| ModeEmissionDto {
            mode,
            emission_kg,
            rating: emission_rating(emission_kg, query.distance),
        })
        .collect();

    Json(CompareResponse {
        distance_km: query.distance,
        emissions,
    })
}
