use axum::{
    routing::{get, on},
    Router,
};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

mod compare;
mod modes;
mod routes;
mod vehicles;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/compare", get(compare::compare))
        .nest_service("/routes", routes::routes(state.clone()))
        .nest_service("/vehicles", vehicles::routes())
        .nest_service("/modes", modes::routes(state.clone()))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}
