#![allow(missing_docs)]

//! Declarative fleet descriptions and the built-in demonstration fleet.

use serde::{Deserialize, Serialize};

use crate::vehicle::{Airplane, Boat, Car, Motorcycle, Vehicle, VehicleKind};

/// Constructor arguments for one vehicle, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VehicleSpec {
    Car {
        brand: String,
        model: String,
        year: u32,
        max_speed: f64,
        fuel_type: String,
        doors: u32,
    },
    Airplane {
        brand: String,
        model: String,
        year: u32,
        max_speed: f64,
        wingspan: f64,
        capacity: u32,
    },
    Boat {
        brand: String,
        model: String,
        year: u32,
        max_speed: f64,
        boat_type: String,
        length: f64,
    },
    Motorcycle {
        brand: String,
        model: String,
        year: u32,
        max_speed: f64,
        engine_size: f64,
        style: String,
    },
}

impl VehicleSpec {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Self::Car { .. } => VehicleKind::Car,
            Self::Airplane { .. } => VehicleKind::Airplane,
            Self::Boat { .. } => VehicleKind::Boat,
            Self::Motorcycle { .. } => VehicleKind::Motorcycle,
        }
    }

    /// Instantiate the described vehicle with all readiness state at its default.
    pub fn build(&self) -> Box<dyn Vehicle> {
        match self.clone() {
            Self::Car {
                brand,
                model,
                year,
                max_speed,
                fuel_type,
                doors,
            } => Box::new(Car::new(brand, model, year, max_speed, fuel_type, doors)),
            Self::Airplane {
                brand,
                model,
                year,
                max_speed,
                wingspan,
                capacity,
            } => Box::new(Airplane::new(
                brand, model, year, max_speed, wingspan, capacity,
            )),
            Self::Boat {
                brand,
                model,
                year,
                max_speed,
                boat_type,
                length,
            } => Box::new(Boat::new(brand, model, year, max_speed, boat_type, length)),
            Self::Motorcycle {
                brand,
                model,
                year,
                max_speed,
                engine_size,
                style,
            } => Box::new(Motorcycle::new(
                brand,
                model,
                year,
                max_speed,
                engine_size,
                style,
            )),
        }
    }
}

/// One vehicle of each kind, in demonstration order.
pub fn default_fleet() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec::Car {
            brand: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            max_speed: 180.0,
            fuel_type: "Gasoline".to_string(),
            doors: 4,
        },
        VehicleSpec::Airplane {
            brand: "Boeing".to_string(),
            model: "747".to_string(),
            year: 2020,
            max_speed: 920.0,
            wingspan: 68.5,
            capacity: 416,
        },
        VehicleSpec::Boat {
            brand: "Yamaha".to_string(),
            model: "242X".to_string(),
            year: 2022,
            max_speed: 45.0,
            boat_type: "Speedboat".to_string(),
            length: 7.3,
        },
        VehicleSpec::Motorcycle {
            brand: "Harley-Davidson".to_string(),
            model: "Sportster".to_string(),
            year: 2023,
            max_speed: 160.0,
            engine_size: 1200.0,
            style: "Cruiser".to_string(),
        },
    ]
}

/// Build every spec, preserving order.
pub fn build_fleet(specs: &[VehicleSpec]) -> Vec<Box<dyn Vehicle>> {
    specs.iter().map(VehicleSpec::build).collect()
}
