pub mod impact;
pub mod mode;
pub mod route;
pub mod vehicle;

pub use impact::{EmissionRating, ImpactMetrics};
pub use mode::TransportMode;
pub use route::{AnnotatedRoute, LatLng, RankedRoutes, RouteCandidate};
pub use vehicle::VehicleSelector;

/// Provides representative example values for schema endpoints.
pub trait ExampleData {
    fn example_data() -> Self;
}
