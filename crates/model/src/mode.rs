use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The transport modes routes are requested and ranked for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Transit,
    Bicycling,
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Driving,
        TransportMode::Transit,
        TransportMode::Bicycling,
        TransportMode::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Driving => "driving",
            TransportMode::Transit => "transit",
            TransportMode::Bicycling => "bicycling",
            TransportMode::Walking => "walking",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown transport mode: {}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for TransportMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(TransportMode::Driving),
            "transit" => Ok(TransportMode::Transit),
            "bicycling" => Ok(TransportMode::Bicycling),
            "walking" => Ok(TransportMode::Walking),
            other => Err(UnknownMode(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_modes() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.as_str().parse::<TransportMode>(), Ok(mode));
        }
    }

    #[test]
    fn rejects_unknown_mode_strings() {
        assert!("teleport".parse::<TransportMode>().is_err());
        assert!("Driving".parse::<TransportMode>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&TransportMode::Bicycling).unwrap();
        assert_eq!(json, "\"bicycling\"");
    }
}
