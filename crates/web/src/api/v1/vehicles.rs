use axum::{
    routing::{get, on},
    Json, Router,
};
use emissions::vehicles::{VehicleTypeCatalog, VEHICLE_CATALOG};
use schemars::JsonSchema;
use serde::Serialize;

use crate::common::{
    route_not_found, schema_no_example, VecResponse, METHOD_FILTER_ALL,
};

pub(crate) fn routes() -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<VehicleTypeDto>))
        .route("/", get(get_vehicles))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleModelDto {
    id: String,
    name: String,
    description: String,
    emission_rate: String,
    examples: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleTypeDto {
    id: String,
    models: Vec<VehicleModelDto>,
}

impl From<&VehicleTypeCatalog> for VehicleTypeDto {
    fn from(catalog: &VehicleTypeCatalog) -> Self {
        Self {
            id: catalog.id.to_owned(),
            models: catalog
                .models
                .iter()
                .map(|(model, info)| VehicleModelDto {
                    id: (*model).to_owned(),
                    name: info.name.to_owned(),
                    description: info.description.to_owned(),
                    emission_rate: info.rate_label.to_owned(),
                    examples: info.examples.to_owned(),
                })
                .collect(),
        }
    }
}

async fn get_vehicles() -> Json<VecResponse<VehicleTypeDto>> {
    VecResponse::new(VEHICLE_CATALOG.iter().map(VehicleTypeDto::from).collect())
        .json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_converts_to_dtos_in_display_order() {
        let dtos = VEHICLE_CATALOG
            .iter()
            .map(VehicleTypeDto::from)
            .collect::<Vec<_>>();
        let ids = dtos.iter().map(|dto| dto.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["car", "motorcycle", "transit", "truck"]);

        let car = &dtos[0];
        assert_eq!(car.models[0].id, "gasoline_small");
        assert_eq!(car.models.last().unwrap().id, "electric_renewable");
    }
}
