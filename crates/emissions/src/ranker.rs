use std::cmp::Ordering;

use model::{AnnotatedRoute, RankedRoutes, RouteCandidate, TransportMode, VehicleSelector};
use utility::math::round_to;

use crate::calculator::{calculate_emission, calculate_vehicle_emission};
use crate::rates::EmissionRates;
use crate::vehicles::vehicle_info;
use crate::RankError;

const CUSTOM_VEHICLE_NAME: &str = "Custom Vehicle";
const CUSTOM_VEHICLE_RATE_LABEL: &str = "Custom rate";

/// Annotate candidates with emission data and rank them ascending by
/// emission.
///
/// The sort is stable: candidates with equal emissions keep the order in
/// which the provider returned them. When a driving candidate exists and the
/// best route is not driving, the best route carries the emission saved
/// compared to driving.
pub fn rank_routes(
    rates: &EmissionRates,
    candidates: Vec<RouteCandidate>,
    vehicle: Option<&VehicleSelector>,
) -> Result<RankedRoutes, RankError> {
    if candidates.is_empty() {
        return Err(RankError::NoRoutesFound);
    }

    let mut routes = candidates
        .into_iter()
        .map(|candidate| annotate(rates, candidate, vehicle))
        .collect::<Vec<_>>();

    routes.sort_by(|a, b| {
        a.emission_kg
            .partial_cmp(&b.emission_kg)
            .unwrap_or(Ordering::Equal)
    });

    let driving_emission = routes
        .iter()
        .find(|route| route.mode() == TransportMode::Driving)
        .map(|route| route.emission_kg);
    if let Some(driving_emission) = driving_emission {
        if routes[0].mode() != TransportMode::Driving {
            routes[0].emission_savings_kg =
                Some(round_to(driving_emission - routes[0].emission_kg, 3));
        }
    }

    let best = routes[0].clone();
    Ok(RankedRoutes { best, routes })
}

fn annotate(
    rates: &EmissionRates,
    candidate: RouteCandidate,
    vehicle: Option<&VehicleSelector>,
) -> AnnotatedRoute {
    let selected_vehicle = vehicle
        .filter(|selector| selector.is_complete())
        .filter(|_| candidate.mode == TransportMode::Driving);

    let (emission_kg, vehicle_name, vehicle_rate_label) = match selected_vehicle {
        Some(selector) => {
            let emission = calculate_vehicle_emission(
                candidate.distance_km,
                &selector.vehicle_type,
                &selector.vehicle_model,
            );
            let info =
                vehicle_info(&selector.vehicle_type, &selector.vehicle_model);
            (
                emission,
                Some(
                    info.map(|info| info.name)
                        .unwrap_or(CUSTOM_VEHICLE_NAME)
                        .to_owned(),
                ),
                Some(
                    info.map(|info| info.rate_label)
                        .unwrap_or(CUSTOM_VEHICLE_RATE_LABEL)
                        .to_owned(),
                ),
            )
        }
        None => (
            calculate_emission(rates, candidate.distance_km, candidate.mode.as_str()),
            None,
            None,
        ),
    };

    let emission_per_km = if candidate.distance_km > 0.0 {
        round_to(emission_kg / candidate.distance_km, 3)
    } else {
        0.0
    };

    AnnotatedRoute {
        candidate,
        emission_kg,
        emission_per_km,
        vehicle_name,
        vehicle_rate_label,
        emission_savings_kg: None,
    }
}
