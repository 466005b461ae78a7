//! Static directories used across harnesses.

use crate::common::builders::{PersonBuilder, VehicleBuilder};
use roster_core::{Entity, VehicleStatus};

/// The six entries of the built-in sample directory, in file order.
pub fn sample_entities() -> Vec<Entity> {
    vec![
        PersonBuilder::new(1, "Tresor Manock").location("Akwa").build(),
        PersonBuilder::new(2, "Mbagna Johan").location("Akwa").build(),
        PersonBuilder::new(3, "Rui Silvestre").location("Bonapriso").build(),
        VehicleBuilder::new("truck-237", "Truck #237")
            .status(VehicleStatus::InUse)
            .driver("Tresor Manock")
            .time("05h/08h")
            .build(),
        VehicleBuilder::new("cargo-098", "CargoNgola #098")
            .status(VehicleStatus::Maintenance)
            .build(),
        VehicleBuilder::new("rui-truck", "Rui Silvestre")
            .status(VehicleStatus::Off)
            .driver("John doe")
            .time("08h/08h")
            .build(),
    ]
}

/// The sample directory as it appears on disk, in the wrapped form.
pub const SAMPLE_JSON: &str = r#"{
  "entities": [
    { "type": "Person", "id": 1, "name": "Tresor Manock", "location": "Akwa" },
    { "type": "Client", "id": 2, "name": "Mbagna Johan", "location": "Akwa" },
    { "type": "Person", "id": 3, "name": "Rui Silvestre", "location": "Bonapriso" },
    { "type": "Vehicle", "id": "truck-237", "name": "Truck #237", "status": "In use",
      "driver": "Tresor Manock", "time": "05h/08h" },
    { "type": "Vehicle", "id": "cargo-098", "name": "CargoNgola #098", "status": "Maintenance" },
    { "type": "Vehicle", "id": "rui-truck", "name": "Rui Silvestre", "status": "Off",
      "driver": "John doe", "time": "08h/08h" }
  ]
}"#;

/// Names containing characters that are special in regex syntax.
pub const REGEX_METACHAR_NAMES: &[&str] = &[
    "Truck #237 (spare)",
    "A.B. Transport",
    "Fleet [north]",
    "Cost $5+",
    "Back\\slash",
    "Pipe | Line",
    "Star*Cargo?",
];
