use tracing::debug;

use super::{Chassis, Vehicle, VehicleKind};
use crate::error::Refusal;

/// Motorcycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    chassis: Chassis,
    /// Displacement in cc.
    pub engine_size: f64,
    /// Riding style, e.g. `Cruiser`.
    pub style: String,
    kickstand_up: bool,
}

impl Motorcycle {
    /// Create a parked motorcycle, kickstand down.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u32,
        max_speed: f64,
        engine_size: f64,
        style: impl Into<String>,
    ) -> Self {
        Self {
            chassis: Chassis::new(brand, model, year, max_speed),
            engine_size,
            style: style.into(),
            kickstand_up: false,
        }
    }

    /// Raise the kickstand so the motorcycle can ride.
    pub fn raise_kickstand(&mut self) -> String {
        self.kickstand_up = true;
        debug!(model = %self.chassis.model, "Kickstand raised");
        "🦵 Kickstand raised!".to_string()
    }

    /// Lower the kickstand.
    pub fn lower_kickstand(&mut self) -> String {
        self.kickstand_up = false;
        debug!(model = %self.chassis.model, "Kickstand lowered");
        "🦵 Kickstand lowered!".to_string()
    }

    /// Whether the kickstand is up.
    pub fn is_kickstand_up(&self) -> bool {
        self.kickstand_up
    }
}

impl Vehicle for Motorcycle {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn try_move(&self) -> Result<String, Refusal> {
        self.chassis.require_running(Refusal::EngineOff)?;
        if !self.kickstand_up {
            return Err(Refusal::KickstandDown);
        }
        Ok(format!(
            "🏍️ Riding {} on streets at up to {} km/h",
            self.chassis.label(),
            self.chassis.max_speed
        ))
    }

    fn info(&self) -> String {
        format!(
            "{} {} | Engine: {}cc | Style: {}",
            self.kind().icon(),
            self.chassis.summary(),
            self.engine_size,
            self.style
        )
    }

    fn prepare(&mut self) -> String {
        self.raise_kickstand()
    }
}
