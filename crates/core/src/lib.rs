#![warn(clippy::all, missing_docs)]

//! Core domain logic for the vehicle movement demonstration.
//!
//! This crate hosts the vehicle contract and its four variants, the fleet
//! descriptions, configuration handling, and the scripted driver used by
//! the `vehicle-demo` binary.

pub mod config;
pub mod demo;
pub mod error;
pub mod fleet;
pub mod vehicle;

pub use self::config::{AppConfig, OutputFormat};
pub use demo::{Section, Transcript};
pub use error::Refusal;
pub use fleet::{build_fleet, default_fleet, VehicleSpec};
pub use vehicle::{
    Airplane, Boat, Car, Chassis, EngineStatus, Gear, Motorcycle, Vehicle, VehicleKind,
};
