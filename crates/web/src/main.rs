use std::sync::Arc;

use emissions::EmissionRates;
use open_route_service::{OrsClient, OrsCredentials};
use routing::RoutePlanner;
use web::{start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // directions provider
    let credentials = OrsCredentials::env();
    let client = OrsClient::new(&credentials)
        .expect("could not build OpenRouteService client.");
    let planner = RoutePlanner::new(client.clone(), client);

    // emission rates
    let rates = EmissionRates::from_env();

    // web server
    let web_future = start_web_server(WebState {
        planner: Arc::new(planner),
        rates: Arc::new(rates),
    });

    let _ = web_future.await;
}
