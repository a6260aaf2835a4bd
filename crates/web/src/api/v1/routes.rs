use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on, post},
    Json, Router,
};
use emissions::{
    emission_rating, environmental_impact,
    modes::sustainability_tips,
    rank_routes,
};
use model::{
    AnnotatedRoute, EmissionRating, ExampleData, ImpactMetrics, RankedRoutes,
    VehicleSelector,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{duration::format_duration, validate::validate_location_input};

use crate::{
    common::{route_not_found, schema, RouteErrorResponse, METHOD_FILTER_ALL},
    RouteResult, WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<RoutesResponse>))
        .route("/", post(find_routes))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutesRequest {
    origin: String,
    destination: String,
    #[serde(default)]
    vehicle_type: Option<String>,
    #[serde(default)]
    vehicle_model: Option<String>,
}

impl RoutesRequest {
    /// The vehicle selection, when both parts were submitted.
    fn vehicle_selector(&self) -> Option<VehicleSelector> {
        match (&self.vehicle_type, &self.vehicle_model) {
            (Some(vehicle_type), Some(vehicle_model)) => {
                let selector =
                    VehicleSelector::new(vehicle_type.clone(), vehicle_model.clone());
                selector.is_complete().then_some(selector)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteDto {
    #[serde(flatten)]
    route: AnnotatedRoute,
    duration_formatted: String,
    rating: EmissionRating,
    rating_description: String,
}

impl From<AnnotatedRoute> for RouteDto {
    fn from(route: AnnotatedRoute) -> Self {
        let rating = emission_rating(route.emission_kg, route.distance_km());
        Self {
            duration_formatted: format_duration(route.candidate.duration_secs),
            rating,
            rating_description: rating.description().to_owned(),
            route,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BestRouteDto {
    #[serde(flatten)]
    route: RouteDto,
    impact: ImpactMetrics,
    tips: Vec<String>,
}

impl From<AnnotatedRoute> for BestRouteDto {
    fn from(route: AnnotatedRoute) -> Self {
        let impact = environmental_impact(route.emission_kg);
        let tips = sustainability_tips(route.mode())
            .iter()
            .map(|tip| (*tip).to_owned())
            .collect();
        Self {
            route: RouteDto::from(route),
            impact,
            tips,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutesResponse {
    origin: String,
    destination: String,
    best_route: BestRouteDto,
    routes: Vec<RouteDto>,
}

impl ExampleData for RoutesResponse {
    fn example_data() -> Self {
        let ranked = RankedRoutes::example_data();
        Self {
            origin: "Kiel".to_owned(),
            destination: "Raisdorf".to_owned(),
            best_route: BestRouteDto::from(ranked.best),
            routes: ranked.routes.into_iter().map(RouteDto::from).collect(),
        }
    }
}

async fn find_routes(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { planner, rates }): State<WebState>,
    Json(request): Json<RoutesRequest>,
) -> RouteResult<Json<RoutesResponse>> {
    let error_context = |why: RouteErrorResponse| {
        why.with_method(&Method::POST).with_uri(original_uri.path())
    };

    let origin = validate_location_input(&request.origin, "origin")
        .map_err(|why| error_context(why.into()))?;
    let destination = validate_location_input(&request.destination, "destination")
        .map_err(|why| error_context(why.into()))?;

    let candidates = planner
        .find_routes(&origin, &destination)
        .await
        .map_err(|why| error_context(why.into()))?;

    let vehicle = request.vehicle_selector();
    let ranked = rank_routes(&rates, candidates, vehicle.as_ref())
        .map_err(|why| error_context(why.into()))?;

    Ok(Json(RoutesResponse {
        origin,
        destination,
        best_route: BestRouteDto::from(ranked.best),
        routes: ranked.routes.into_iter().map(RouteDto::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TransportMode;

    #[test]
    fn vehicle_selector_requires_both_parts() {
        let request = RoutesRequest {
            origin: "Kiel".to_owned(),
            destination: "Raisdorf".to_owned(),
            vehicle_type: Some("car".to_owned()),
            vehicle_model: None,
        };
        assert_eq!(request.vehicle_selector(), None);

        let request = RoutesRequest {
            vehicle_type: Some("car".to_owned()),
            vehicle_model: Some("hybrid".to_owned()),
            ..request
        };
        assert_eq!(
            request.vehicle_selector(),
            Some(VehicleSelector::new("car", "hybrid"))
        );
    }

    #[test]
    fn route_dto_carries_rating_and_formatted_duration() {
        let route = AnnotatedRoute::example_data();
        let dto = RouteDto::from(route);
        assert_eq!(dto.rating, EmissionRating::APlus);
        assert_eq!(dto.duration_formatted, "24 minutes");
    }

    #[test]
    fn best_route_dto_carries_impact_and_tips() {
        let dto = BestRouteDto::from(AnnotatedRoute::example_data());
        assert_eq!(dto.impact.trees_needed, 0.0);
        assert_eq!(dto.route.route.mode(), TransportMode::Bicycling);
        assert!(!dto.tips.is_empty());
    }

    #[test]
    fn response_serializes_with_camel_case_fields() {
        let json =
            serde_json::to_value(RoutesResponse::example_data()).unwrap();
        assert!(json.get("bestRoute").is_some());
        let best = json.get("bestRoute").unwrap();
        assert!(best.get("emissionKg").is_some());
        assert!(best.get("durationFormatted").is_some());
        assert!(best.get("emissionSavingsKg").is_some());
    }
}
