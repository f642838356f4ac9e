use tracing::debug;

use super::{Chassis, Vehicle, VehicleKind};
use crate::error::Refusal;

/// Motor boat.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    chassis: Chassis,
    /// Hull category, e.g. `Speedboat`.
    pub boat_type: String,
    /// Length in metres.
    pub length: f64,
    anchor_dropped: bool,
}

impl Boat {
    /// Create a boat with the anchor up and the engine off.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u32,
        max_speed: f64,
        boat_type: impl Into<String>,
        length: f64,
    ) -> Self {
        Self {
            chassis: Chassis::new(brand, model, year, max_speed),
            boat_type: boat_type.into(),
            length,
            anchor_dropped: false,
        }
    }

    /// Drop the anchor.
    pub fn drop_anchor(&mut self) -> String {
        self.anchor_dropped = true;
        debug!(model = %self.chassis.model, "Anchor dropped");
        "⚓ Anchor dropped! Boat is stationary".to_string()
    }

    /// Raise the anchor.
    pub fn raise_anchor(&mut self) -> String {
        self.anchor_dropped = false;
        debug!(model = %self.chassis.model, "Anchor raised");
        "🎯 Anchor raised! Ready to move".to_string()
    }

    /// Whether the anchor is down.
    pub fn is_anchor_dropped(&self) -> bool {
        self.anchor_dropped
    }
}

impl Vehicle for Boat {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Boat
    }

    fn try_move(&self) -> Result<String, Refusal> {
        self.chassis.require_running(Refusal::EngineOff)?;
        if self.anchor_dropped {
            return Err(Refusal::AnchorDropped);
        }
        Ok(format!(
            "🚢 Sailing {} on water at up to {} knots",
            self.chassis.label(),
            self.chassis.max_speed
        ))
    }

    fn info(&self) -> String {
        format!(
            "{} {} | Type: {} | Length: {}m",
            self.kind().icon(),
            self.chassis.summary(),
            self.boat_type,
            self.length
        )
    }

    fn prepare(&mut self) -> String {
        self.raise_anchor()
    }
}
