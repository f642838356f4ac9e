//! The vehicle contract and the state every vehicle shares.
//!
//! Each concrete vehicle embeds a [`Chassis`] carrying identity and engine
//! state, and implements [`Vehicle`] for its own movement rules. Engine
//! handling lives on the trait as default methods so every variant behaves
//! identically there.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Refusal};

mod airplane;
mod boat;
mod car;
mod motorcycle;

pub use airplane::{Airplane, CRUISING_ALTITUDE};
pub use boat::Boat;
pub use car::{Car, Gear};
pub use motorcycle::Motorcycle;

/// Whether a vehicle's engine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    /// Engine stopped. Every vehicle starts here.
    #[default]
    Off,
    /// Engine running.
    On,
}

impl EngineStatus {
    /// Lower-case label used in transcripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag identifying a vehicle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Road car with a gearbox.
    Car,
    /// Fixed-wing aircraft.
    Airplane,
    /// Motor boat with an anchor.
    Boat,
    /// Motorcycle with a kickstand.
    Motorcycle,
}

impl VehicleKind {
    /// Lower-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Airplane => "airplane",
            Self::Boat => "boat",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// Pictogram placed in front of the vehicle's info line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Car => "🚗",
            Self::Airplane => "✈️",
            Self::Boat => "🚢",
            Self::Motorcycle => "🏍️",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and engine state shared by all vehicles.
#[derive(Debug, Clone, PartialEq)]
pub struct Chassis {
    /// Manufacturer name.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: u32,
    /// Top speed, in the unit the variant reports.
    pub max_speed: f64,
    engine_status: EngineStatus,
}

impl Chassis {
    /// Create a chassis with the engine off.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u32,
        max_speed: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            max_speed,
            engine_status: EngineStatus::Off,
        }
    }

    /// Current engine state.
    pub fn engine_status(&self) -> EngineStatus {
        self.engine_status
    }

    /// Returns `true` while the engine runs.
    pub fn is_running(&self) -> bool {
        self.engine_status == EngineStatus::On
    }

    /// Start the engine and return the confirmation.
    pub fn start_engine(&mut self) -> String {
        self.engine_status = EngineStatus::On;
        debug!(brand = %self.brand, model = %self.model, "Engine started");
        format!("🚀 {} engine started!", self.label())
    }

    /// Stop the engine and return the confirmation.
    pub fn stop_engine(&mut self) -> String {
        self.engine_status = EngineStatus::Off;
        debug!(brand = %self.brand, model = %self.model, "Engine stopped");
        format!("🛑 {} engine stopped!", self.label())
    }

    /// Brand and model joined with a space.
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// One-line summary without any variant-specific fields.
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} (Max Speed: {} km/h)",
            self.year, self.brand, self.model, self.max_speed
        )
    }

    /// Fail with `refusal` unless the engine is running.
    pub(crate) fn require_running(&self, refusal: Refusal) -> Result<(), Refusal> {
        if self.is_running() {
            Ok(())
        } else {
            Err(refusal)
        }
    }
}

/// Behaviour common to every vehicle.
///
/// Implementors supply movement rules, an info line and a preparation step;
/// engine control comes for free through the [`Chassis`].
pub trait Vehicle: fmt::Debug {
    /// Shared identity and engine state.
    fn chassis(&self) -> &Chassis;

    /// Mutable access to the shared state.
    fn chassis_mut(&mut self) -> &mut Chassis;

    /// Which variant this is.
    fn kind(&self) -> VehicleKind;

    /// Attempt to move, reporting the blocking precondition on failure.
    fn try_move(&self) -> Result<String, Refusal>;

    /// Summary line including variant-specific fields.
    fn info(&self) -> String;

    /// Put the vehicle in a state where it can move once the engine runs.
    fn prepare(&mut self) -> String;

    /// Extra status reported after the engine state, if the variant has any.
    fn status_line(&self) -> Option<String> {
        None
    }

    /// Start the engine.
    fn start_engine(&mut self) -> String {
        self.chassis_mut().start_engine()
    }

    /// Stop the engine.
    fn stop_engine(&mut self) -> String {
        self.chassis_mut().stop_engine()
    }

    /// Current engine state.
    fn engine_status(&self) -> EngineStatus {
        self.chassis().engine_status()
    }

    /// Move, or explain why the vehicle cannot.
    fn r#move(&self) -> String {
        error::into_message(self.try_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Box<dyn Vehicle>> {
        vec![
            Box::new(Car::new("Toyota", "Camry", 2023, 180.0, "Gasoline", 4)),
            Box::new(Airplane::new("Boeing", "747", 2020, 920.0, 68.5, 416)),
            Box::new(Boat::new("Yamaha", "242X", 2022, 45.0, "Speedboat", 7.3)),
            Box::new(Motorcycle::new(
                "Harley-Davidson",
                "Sportster",
                2023,
                160.0,
                1200.0,
                "Cruiser",
            )),
        ]
    }

    #[test]
    fn engine_cycle_applies_to_every_variant() {
        for mut vehicle in fleet() {
            assert_eq!(vehicle.engine_status(), EngineStatus::Off);
            vehicle.start_engine();
            assert_eq!(vehicle.engine_status(), EngineStatus::On);
            vehicle.stop_engine();
            assert_eq!(vehicle.engine_status(), EngineStatus::Off);
        }
    }

    #[test]
    fn engine_messages_name_the_vehicle() {
        let mut car = Car::new("Toyota", "Camry", 2023, 180.0, "Gasoline", 4);
        assert_eq!(car.start_engine(), "🚀 Toyota Camry engine started!");
        assert_eq!(car.stop_engine(), "🛑 Toyota Camry engine stopped!");
    }

    #[test]
    fn moving_with_engine_off_is_refused() {
        let expected = [
            "❌ Start the engine first!",
            "❌ Start the engines first!",
            "❌ Start the engine first!",
            "❌ Start the engine first!",
        ];
        for (vehicle, expected) in fleet().iter().zip(expected) {
            assert_eq!(vehicle.r#move(), expected, "{}", vehicle.kind());
        }
    }

    #[test]
    fn summary_drops_trailing_zero_fraction() {
        let chassis = Chassis::new("Yamaha", "242X", 2022, 45.0);
        assert_eq!(chassis.summary(), "2022 Yamaha 242X (Max Speed: 45 km/h)");
    }

    #[test]
    fn status_labels_are_lowercase() {
        assert_eq!(EngineStatus::On.to_string(), "on");
        assert_eq!(EngineStatus::default().to_string(), "off");
        assert_eq!(VehicleKind::Motorcycle.to_string(), "motorcycle");
    }
}
