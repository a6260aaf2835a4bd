use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user-selected vehicle, meaningful only for driving routes.
///
/// Both fields are free-form keys into the vehicle rate table; unknown keys
/// fall back through the documented rate defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSelector {
    pub vehicle_type: String,
    pub vehicle_model: String,
}

impl VehicleSelector {
    pub fn new(
        vehicle_type: impl Into<String>,
        vehicle_model: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            vehicle_model: vehicle_model.into(),
        }
    }

    /// A selector with an empty type or model carries no usable information.
    pub fn is_complete(&self) -> bool {
        !self.vehicle_type.trim().is_empty() && !self.vehicle_model.trim().is_empty()
    }
}
