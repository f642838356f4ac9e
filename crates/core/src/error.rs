//! Reasons a vehicle declines an operation.

use thiserror::Error;

/// A precondition that blocked an operation.
///
/// The `Display` form is the message handed back to callers; vehicle
/// operations never fail with a fault, they answer with this text instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    /// Engine is off (cars, boats, motorcycles).
    #[error("❌ Start the engine first!")]
    EngineOff,
    /// Engines are off (airplanes).
    #[error("❌ Start the engines first!")]
    EnginesOff,
    /// Take-off attempted with the engines off.
    #[error("❌ Start engines before takeoff!")]
    TakeoffWithoutEngines,
    /// Boat asked to move while anchored.
    #[error("⛵ Raise the anchor first!")]
    AnchorDropped,
    /// Motorcycle asked to move with the kickstand down.
    #[error("🛵 Raise the kickstand first!")]
    KickstandDown,
    /// Requested gear is not one of P, R, N, D.
    #[error("❌ Invalid gear!")]
    InvalidGear(String),
}

/// Collapse an operation outcome into the message shown to the user.
pub(crate) fn into_message(outcome: Result<String, Refusal>) -> String {
    outcome.unwrap_or_else(|refusal| refusal.to_string())
}
