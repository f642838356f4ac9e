use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Chassis, Vehicle, VehicleKind};
use crate::error::{self, Refusal};

/// Gearbox positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gear {
    /// Park.
    #[default]
    P,
    /// Reverse.
    R,
    /// Neutral.
    N,
    /// Drive.
    D,
}

impl Gear {
    /// Single-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::R => "R",
            Self::N => "N",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gear {
    type Err = Refusal;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "P" => Ok(Self::P),
            "R" => Ok(Self::R),
            "N" => Ok(Self::N),
            "D" => Ok(Self::D),
            other => Err(Refusal::InvalidGear(other.to_string())),
        }
    }
}

/// Passenger car.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    chassis: Chassis,
    /// Fuel the car runs on.
    pub fuel_type: String,
    /// Number of doors.
    pub doors: u32,
    current_gear: Gear,
}

impl Car {
    /// Create a parked car with the engine off.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u32,
        max_speed: f64,
        fuel_type: impl Into<String>,
        doors: u32,
    ) -> Self {
        Self {
            chassis: Chassis::new(brand, model, year, max_speed),
            fuel_type: fuel_type.into(),
            doors,
            current_gear: Gear::default(),
        }
    }

    /// Shift into `gear`, given as its letter code.
    ///
    /// Unknown codes leave the gearbox untouched and answer with the
    /// invalid-gear message.
    pub fn change_gear(&mut self, gear: &str) -> String {
        error::into_message(self.shift(gear))
    }

    /// Gear currently engaged.
    pub fn current_gear(&self) -> Gear {
        self.current_gear
    }

    fn shift(&mut self, gear: &str) -> Result<String, Refusal> {
        let gear = gear.parse::<Gear>().inspect_err(|refusal| {
            if let Refusal::InvalidGear(requested) = refusal {
                debug!(model = %self.chassis.model, %requested, "Gear change rejected");
            }
        })?;
        self.current_gear = gear;
        debug!(model = %self.chassis.model, %gear, "Gear changed");
        Ok(format!("⚙️ Gear changed to {gear}"))
    }
}

impl Vehicle for Car {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn try_move(&self) -> Result<String, Refusal> {
        self.chassis.require_running(Refusal::EngineOff)?;
        Ok(format!(
            "🚗 Driving {} on the road at up to {} km/h",
            self.chassis.label(),
            self.chassis.max_speed
        ))
    }

    fn info(&self) -> String {
        format!(
            "{} {} | Fuel: {} | Doors: {}",
            self.kind().icon(),
            self.chassis.summary(),
            self.fuel_type,
            self.doors
        )
    }

    fn prepare(&mut self) -> String {
        self.change_gear(Gear::D.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> Car {
        Car::new("Toyota", "Camry", 2023, 180.0, "Gasoline", 4)
    }

    #[test]
    fn starts_in_park() {
        assert_eq!(camry().current_gear(), Gear::P);
    }

    #[test]
    fn valid_gear_is_engaged() {
        let mut car = camry();
        assert_eq!(car.change_gear("D"), "⚙️ Gear changed to D");
        assert_eq!(car.current_gear(), Gear::D);
        assert_eq!(car.change_gear("R"), "⚙️ Gear changed to R");
        assert_eq!(car.current_gear(), Gear::R);
    }

    #[test]
    fn invalid_gear_keeps_current_one() {
        let mut car = camry();
        car.change_gear("N");
        assert_eq!(car.change_gear("X"), "❌ Invalid gear!");
        assert_eq!(car.change_gear("d"), "❌ Invalid gear!");
        assert_eq!(car.current_gear(), Gear::N);
    }

    #[test]
    fn rejected_gear_carries_the_requested_code() {
        assert_eq!(
            "X".parse::<Gear>(),
            Err(Refusal::InvalidGear("X".to_string()))
        );
        assert_eq!("D".parse::<Gear>(), Ok(Gear::D));
    }

    #[test]
    fn refused_move_leaves_gear_alone() {
        let car = camry();
        assert_eq!(car.r#move(), "❌ Start the engine first!");
        assert_eq!(car.current_gear(), Gear::P);
    }

    #[test]
    fn start_shift_and_drive() {
        let mut car = camry();
        let transcript = [car.start_engine(), car.change_gear("D"), car.r#move()];
        assert_eq!(transcript[0], "🚀 Toyota Camry engine started!");
        assert_eq!(transcript[1], "⚙️ Gear changed to D");
        assert!(transcript[2].contains("180"));
        assert_eq!(
            transcript[2],
            "🚗 Driving Toyota Camry on the road at up to 180 km/h"
        );
    }

    #[test]
    fn info_lists_fuel_and_doors() {
        assert_eq!(
            camry().info(),
            "🚗 2023 Toyota Camry (Max Speed: 180 km/h) | Fuel: Gasoline | Doors: 4"
        );
    }

    #[test]
    fn prepare_selects_drive() {
        let mut car = camry();
        assert_eq!(car.prepare(), "⚙️ Gear changed to D");
        assert_eq!(car.current_gear(), Gear::D);
    }
}
