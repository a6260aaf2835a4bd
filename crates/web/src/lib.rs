pub use crate::common::RouteResult;

use std::env;
use std::sync::Arc;

use axum::{
    extract::FromRef, response::IntoResponse, routing::get, routing::get_service,
    Json, Router,
};
use emissions::EmissionRates;
use open_route_service::OrsClient;
use routing::RoutePlanner;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub mod api;
pub mod common;

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub planner: Arc<RoutePlanner<OrsClient, OrsClient>>,
    pub rates: Arc<EmissionRates>,
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .route("/health", get(health))
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router());

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Web server listening on port {port}.");
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn static_content_router() -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/")
                .not_found_service(ServeFile::new("./resources/www/error404.html")),
        ),
    )
}
