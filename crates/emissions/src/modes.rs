use model::TransportMode;

/// Display metadata for a transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub benefits: &'static str,
    pub drawbacks: &'static str,
}

static DRIVING_INFO: ModeInfo = ModeInfo {
    name: "Driving",
    icon: "🚗",
    description: "Personal vehicle transportation",
    benefits: "Fast and convenient",
    drawbacks: "High emissions and fuel costs",
};

static TRANSIT_INFO: ModeInfo = ModeInfo {
    name: "Public Transit",
    icon: "🚌",
    description: "Bus, train, or other public transport",
    benefits: "Lower emissions per person, cost-effective",
    drawbacks: "Limited routes and schedules",
};

static BICYCLING_INFO: ModeInfo = ModeInfo {
    name: "Bicycling",
    icon: "🚴",
    description: "Bicycle transportation",
    benefits: "Zero emissions, great exercise",
    drawbacks: "Weather dependent, limited range",
};

static WALKING_INFO: ModeInfo = ModeInfo {
    name: "Walking",
    icon: "🚶",
    description: "Walking transportation",
    benefits: "Zero emissions, excellent exercise",
    drawbacks: "Slow for long distances",
};

pub fn mode_info(mode: TransportMode) -> &'static ModeInfo {
    match mode {
        TransportMode::Driving => &DRIVING_INFO,
        TransportMode::Transit => &TRANSIT_INFO,
        TransportMode::Bicycling => &BICYCLING_INFO,
        TransportMode::Walking => &WALKING_INFO,
    }
}

/// Suggestions shown alongside the best route for a mode.
pub fn sustainability_tips(mode: TransportMode) -> &'static [&'static str] {
    match mode {
        TransportMode::Walking => &[
            "Walking is the most sustainable option - zero emissions!",
            "Consider walking for short distances to improve your health",
            "Use walking apps to find pedestrian-friendly routes",
        ],
        TransportMode::Bicycling => &[
            "Cycling is excellent for the environment and your health",
            "Consider bike-sharing programs if you don't own a bike",
            "Plan routes using dedicated bike paths for safety",
        ],
        TransportMode::Transit => &[
            "Public transit significantly reduces per-person emissions",
            "Consider monthly passes for regular commuting",
            "Combine transit with walking/cycling for the last mile",
        ],
        TransportMode::Driving => &[
            "Consider carpooling to reduce emissions per person",
            "Plan multiple errands in one trip to minimize driving",
            "Look into electric or hybrid vehicles for your next car",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_info_and_tips() {
        for mode in TransportMode::ALL {
            assert!(!mode_info(mode).name.is_empty());
            assert!(!sustainability_tips(mode).is_empty());
        }
    }

    #[test]
    fn info_matches_mode() {
        assert_eq!(mode_info(TransportMode::Transit).name, "Public Transit");
        assert_eq!(mode_info(TransportMode::Walking).icon, "🚶");
    }
}
