//! Scripted walk-through of a fleet.
//!
//! Every vehicle goes through the same steps: start the engine, prepare to
//! move, move, report status, stop the engine. The result is collected as a
//! [`Transcript`] so callers decide how to present it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::vehicle::{Vehicle, VehicleKind};

/// Heading printed above the transcript.
pub const TITLE: &str = "🚀 VEHICLE MOVEMENT DEMONSTRATION";

const TITLE_RULE_WIDTH: usize = 50;
const SECTION_RULE_WIDTH: usize = 40;

/// Messages produced while exercising one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Variant the section belongs to.
    pub kind: VehicleKind,
    /// The vehicle's info line, captured before any step runs.
    pub info: String,
    /// Step messages in execution order.
    pub steps: Vec<String>,
}

/// Full output of a demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Heading line.
    pub title: String,
    /// One section per vehicle, in fleet order.
    pub sections: Vec<Section>,
}

impl Transcript {
    /// Plain-text rendering, one message per line.
    pub fn render(&self) -> String {
        let mut lines = vec![self.title.clone(), "=".repeat(TITLE_RULE_WIDTH)];
        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.info.clone());
            lines.push("-".repeat(SECTION_RULE_WIDTH));
            lines.extend(section.steps.iter().cloned());
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

/// Run the script over `fleet`, leaving every engine stopped afterwards.
pub fn run(fleet: &mut [Box<dyn Vehicle>]) -> Transcript {
    info!(vehicles = fleet.len(), "Running vehicle demonstration");
    let sections = fleet
        .iter_mut()
        .map(|vehicle| exercise(vehicle.as_mut()))
        .collect();

    Transcript {
        title: TITLE.to_string(),
        sections,
    }
}

fn exercise(vehicle: &mut dyn Vehicle) -> Section {
    let info = vehicle.info();
    let mut steps = vec![vehicle.start_engine(), vehicle.prepare(), vehicle.r#move()];
    steps.push(format!("Engine Status: {}", vehicle.engine_status()));
    if let Some(status) = vehicle.status_line() {
        steps.push(status);
    }
    steps.push(vehicle.stop_engine());

    Section {
        kind: vehicle.kind(),
        info,
        steps,
    }
}
