//! LabPlan Settings Crate
//!
//! Handles planner configuration: snapping tolerances, door placement rules
//! and the millimetre-to-canvas scale, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, DoorSettings, PlannerSettings, SnapSettings};
pub use error::{SettingsError, SettingsResult};
