use tracing::debug;

use super::{Chassis, Vehicle, VehicleKind};
use crate::error::{self, Refusal};

/// Altitude reached after take-off, in feet.
pub const CRUISING_ALTITUDE: u32 = 10_000;

/// Passenger airplane.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    chassis: Chassis,
    /// Wingspan in metres.
    pub wingspan: f64,
    /// Passenger seats.
    pub capacity: u32,
    altitude: u32,
}

impl Airplane {
    /// Create a grounded airplane with the engines off.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u32,
        max_speed: f64,
        wingspan: f64,
        capacity: u32,
    ) -> Self {
        Self {
            chassis: Chassis::new(brand, model, year, max_speed),
            wingspan,
            capacity,
            altitude: 0,
        }
    }

    /// Climb to [`CRUISING_ALTITUDE`]; refused while the engines are off.
    pub fn take_off(&mut self) -> String {
        error::into_message(self.climb())
    }

    /// Current altitude in feet.
    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    /// Human-readable altitude report.
    pub fn get_altitude(&self) -> String {
        format!("📊 Current altitude: {} feet", self.altitude)
    }

    fn climb(&mut self) -> Result<String, Refusal> {
        self.chassis.require_running(Refusal::TakeoffWithoutEngines)?;
        self.altitude = CRUISING_ALTITUDE;
        debug!(model = %self.chassis.model, altitude = self.altitude, "Airplane took off");
        Ok("🛫 Airplane taking off! Climbing to 10,000 feet".to_string())
    }
}

impl Vehicle for Airplane {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Airplane
    }

    fn try_move(&self) -> Result<String, Refusal> {
        self.chassis.require_running(Refusal::EnginesOff)?;
        Ok(format!(
            "✈️ Flying {} in the sky at up to {} km/h",
            self.chassis.label(),
            self.chassis.max_speed
        ))
    }

    fn info(&self) -> String {
        format!(
            "{} {} | Wingspan: {}m | Capacity: {} passengers",
            self.kind().icon(),
            self.chassis.summary(),
            self.wingspan,
            self.capacity
        )
    }

    fn prepare(&mut self) -> String {
        self.take_off()
    }

    fn status_line(&self) -> Option<String> {
        Some(self.get_altitude())
    }
}
