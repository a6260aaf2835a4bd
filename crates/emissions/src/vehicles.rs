/// Display metadata for a vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub rate_label: &'static str,
    pub examples: &'static str,
}

/// All models of one vehicle type, in display order.
#[derive(Debug, Clone, Copy)]
pub struct VehicleTypeCatalog {
    pub id: &'static str,
    pub models: &'static [(&'static str, VehicleInfo)],
}

static CAR_MODELS: &[(&str, VehicleInfo)] = &[
    (
        "gasoline_small",
        VehicleInfo {
            name: "Small Gasoline Car",
            description: "Compact or subcompact gasoline vehicle",
            rate_label: "0.120 kg CO2/km",
            examples: "Honda Civic, Toyota Corolla, Ford Focus",
        },
    ),
    (
        "gasoline_medium",
        VehicleInfo {
            name: "Medium Gasoline Car",
            description: "Mid-size gasoline sedan or hatchback",
            rate_label: "0.180 kg CO2/km",
            examples: "Toyota Camry, Honda Accord, Volkswagen Passat",
        },
    ),
    (
        "gasoline_large",
        VehicleInfo {
            name: "Large Gasoline Car/SUV",
            description: "Large sedan, SUV, or pickup truck",
            rate_label: "0.250 kg CO2/km",
            examples: "Ford F-150, Toyota Highlander, Chevrolet Tahoe",
        },
    ),
    (
        "diesel_small",
        VehicleInfo {
            name: "Small Diesel Car",
            description: "Compact diesel vehicle",
            rate_label: "0.140 kg CO2/km",
            examples: "Volkswagen Golf TDI, BMW 320d",
        },
    ),
    (
        "diesel_medium",
        VehicleInfo {
            name: "Medium Diesel Car",
            description: "Mid-size diesel vehicle",
            rate_label: "0.200 kg CO2/km",
            examples: "BMW 520d, Mercedes E220d",
        },
    ),
    (
        "hybrid",
        VehicleInfo {
            name: "Hybrid Vehicle",
            description: "Gasoline-electric hybrid",
            rate_label: "0.080 kg CO2/km",
            examples: "Toyota Prius, Honda Insight, Ford Fusion Hybrid",
        },
    ),
    (
        "electric",
        VehicleInfo {
            name: "Electric Vehicle",
            description: "Battery electric vehicle (grid average)",
            rate_label: "0.040 kg CO2/km",
            examples: "Tesla Model 3, Nissan Leaf, Chevrolet Bolt",
        },
    ),
    (
        "electric_renewable",
        VehicleInfo {
            name: "Electric Vehicle (Renewable)",
            description: "Battery electric vehicle with renewable energy",
            rate_label: "0.010 kg CO2/km",
            examples: "Tesla with solar charging, any EV with green energy",
        },
    ),
];

static MOTORCYCLE_MODELS: &[(&str, VehicleInfo)] = &[
    (
        "small",
        VehicleInfo {
            name: "Small Motorcycle",
            description: "Small displacement motorcycle (125cc)",
            rate_label: "0.080 kg CO2/km",
            examples: "Honda CB125F, Yamaha YBR125",
        },
    ),
    (
        "medium",
        VehicleInfo {
            name: "Medium Motorcycle",
            description: "Medium displacement motorcycle (500cc)",
            rate_label: "0.120 kg CO2/km",
            examples: "Honda CB500F, Kawasaki Ninja 400",
        },
    ),
    (
        "large",
        VehicleInfo {
            name: "Large Motorcycle",
            description: "Large displacement motorcycle (1000cc+)",
            rate_label: "0.180 kg CO2/km",
            examples: "Honda CBR1000RR, Yamaha R1, BMW S1000RR",
        },
    ),
    (
        "electric",
        VehicleInfo {
            name: "Electric Motorcycle",
            description: "Battery electric motorcycle",
            rate_label: "0.020 kg CO2/km",
            examples: "Zero SR/F, Harley-Davidson LiveWire",
        },
    ),
];

static TRANSIT_MODELS: &[(&str, VehicleInfo)] = &[
    (
        "bus",
        VehicleInfo {
            name: "Bus",
            description: "Public bus transportation",
            rate_label: "0.068 kg CO2/km per passenger",
            examples: "City buses, intercity coaches",
        },
    ),
    (
        "train",
        VehicleInfo {
            name: "Train",
            description: "Rail transportation",
            rate_label: "0.041 kg CO2/km per passenger",
            examples: "Commuter trains, intercity rail",
        },
    ),
    (
        "subway",
        VehicleInfo {
            name: "Subway/Metro",
            description: "Underground rail transportation",
            rate_label: "0.035 kg CO2/km per passenger",
            examples: "New York Subway, London Underground",
        },
    ),
    (
        "tram",
        VehicleInfo {
            name: "Tram/Light Rail",
            description: "Light rail or streetcar",
            rate_label: "0.030 kg CO2/km per passenger",
            examples: "Portland Streetcar, San Francisco Muni",
        },
    ),
];

static TRUCK_MODELS: &[(&str, VehicleInfo)] = &[
    (
        "small",
        VehicleInfo {
            name: "Small Truck",
            description: "Small delivery or pickup truck",
            rate_label: "0.200 kg CO2/km",
            examples: "Ford Ranger, Toyota Tacoma",
        },
    ),
    (
        "medium",
        VehicleInfo {
            name: "Medium Truck",
            description: "Medium commercial truck",
            rate_label: "0.350 kg CO2/km",
            examples: "Ford F-650, Freightliner M2",
        },
    ),
    (
        "large",
        VehicleInfo {
            name: "Large Truck",
            description: "Heavy commercial truck",
            rate_label: "0.500 kg CO2/km",
            examples: "Freightliner Cascadia, Peterbilt 579",
        },
    ),
];

/// Selectable vehicles with display metadata, in display order.
pub static VEHICLE_CATALOG: [VehicleTypeCatalog; 4] = [
    VehicleTypeCatalog {
        id: "car",
        models: CAR_MODELS,
    },
    VehicleTypeCatalog {
        id: "motorcycle",
        models: MOTORCYCLE_MODELS,
    },
    VehicleTypeCatalog {
        id: "transit",
        models: TRANSIT_MODELS,
    },
    VehicleTypeCatalog {
        id: "truck",
        models: TRUCK_MODELS,
    },
];

/// Look up display metadata for a vehicle type and model.
pub fn vehicle_info(
    vehicle_type: &str,
    vehicle_model: &str,
) -> Option<&'static VehicleInfo> {
    VEHICLE_CATALOG
        .iter()
        .find(|catalog| catalog.id == vehicle_type)?
        .models
        .iter()
        .find(|(model, _)| *model == vehicle_model)
        .map(|(_, info)| info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::vehicle_rate;

    #[test]
    fn finds_known_vehicles() {
        let info = vehicle_info("car", "electric").unwrap();
        assert_eq!(info.name, "Electric Vehicle");
        assert_eq!(info.rate_label, "0.040 kg CO2/km");

        let info = vehicle_info("truck", "large").unwrap();
        assert_eq!(info.name, "Large Truck");
    }

    #[test]
    fn unknown_vehicles_have_no_metadata() {
        assert_eq!(vehicle_info("car", "steam_powered"), None);
        assert_eq!(vehicle_info("hovercraft", "small"), None);
    }

    #[test]
    fn catalog_covers_expected_types() {
        let ids = VEHICLE_CATALOG
            .iter()
            .map(|catalog| catalog.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["car", "motorcycle", "transit", "truck"]);
        assert_eq!(CAR_MODELS.len(), 8);
    }

    #[test]
    fn every_catalog_entry_has_a_rate_table_entry() {
        // The catalog is display metadata for rates that actually exist;
        // the rate labels must describe the rate the calculator applies.
        for catalog in &VEHICLE_CATALOG {
            for (model, info) in catalog.models {
                let rate = vehicle_rate(catalog.id, model);
                let label_rate = info
                    .rate_label
                    .split(' ')
                    .next()
                    .and_then(|raw| raw.parse::<f64>().ok())
                    .unwrap();
                assert_eq!(rate, label_rate, "{}/{}", catalog.id, model);
            }
        }
    }
}
