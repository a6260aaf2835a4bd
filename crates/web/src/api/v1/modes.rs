use axum::{
    extract::State,
    routing::{get, on},
    Json, Router,
};
use emissions::modes::{mode_info, sustainability_tips};
use model::TransportMode;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    common::{route_not_found, schema_no_example, VecResponse, METHOD_FILTER_ALL},
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<ModeDto>))
        .route("/", get(get_modes))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModeDto {
    id: TransportMode,
    name: String,
    icon: String,
    description: String,
    benefits: String,
    drawbacks: String,
    emission_rate_kg_per_km: f64,
    tips: Vec<String>,
}

async fn get_modes(
    State(WebState { rates, .. }): State<WebState>,
) -> Json<VecResponse<ModeDto>> {
    let modes = TransportMode::ALL
        .into_iter()
        .map(|mode| {
            let info = mode_info(mode);
            ModeDto {
                id: mode,
                name: info.name.to_owned(),
                icon: info.icon.to_owned(),
                description: info.description.to_owned(),
                benefits: info.benefits.to_owned(),
                drawbacks: info.drawbacks.to_owned(),
                emission_rate_kg_per_km: rates.rate(mode),
                tips: sustainability_tips(mode)
                    .iter()
                    .map(|tip| (*tip).to_owned())
                    .collect(),
            }
        })
        .collect();
    VecResponse::new(modes).json()
}
