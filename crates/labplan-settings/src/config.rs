//! Planner configuration
//!
//! Provides configuration file handling and validation for the floor-plan
//! editor. Supports JSON and TOML files; the format follows the extension.
//!
//! Configuration is organized into sections:
//! - Snapping (grid pitch, threshold, guide overhang)
//! - Doors (corner clearance, pick distance, default width)
//! - Canvas (millimetres per canvas unit)

use crate::error::{SettingsError, SettingsResult};
use labplan_core::{Polygon, Scale};
use labplan_floorplan::{DoorConfig, DoorTool, FloorPlan, SnapConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Snapping preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Grid pitch in canvas units
    pub grid_size: f64,
    /// Distance at which edge and grid snaps engage
    pub snap_threshold: f64,
    /// How far guides extend past the aligned products
    pub guide_overhang: f64,
    /// Snap to the grid when no edge snap applies
    pub enable_grid_snap: bool,
}

impl Default for SnapSettings {
    fn default() -> Self {
        let snap = SnapConfig::default();
        Self {
            grid_size: snap.grid_size,
            snap_threshold: snap.snap_threshold,
            guide_overhang: snap.guide_overhang,
            enable_grid_snap: snap.enable_grid_snap,
        }
    }
}

/// Door placement preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorSettings {
    /// Lowest allowed normalized position along a wall
    pub min_position: f64,
    /// Highest allowed normalized position along a wall
    pub max_position: f64,
    /// Maximum click distance from a wall, in canvas units
    pub pick_distance: f64,
    /// Width given to new doors
    pub default_width: f64,
}

impl Default for DoorSettings {
    fn default() -> Self {
        let doors = DoorConfig::default();
        Self {
            min_position: doors.min_position,
            max_position: doors.max_position,
            pick_distance: labplan_floorplan::DEFAULT_PICK_DISTANCE,
            default_width: labplan_floorplan::DEFAULT_DOOR_WIDTH,
        }
    }
}

/// Canvas preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Millimetres represented by one canvas unit
    pub mm_per_canvas_unit: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            mm_per_canvas_unit: 10.0,
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub snapping: SnapSettings,
    pub doors: DoorSettings,
    pub canvas: CanvasSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl PlannerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/labplan/settings.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("labplan").join("settings.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), %err, "using default planner settings");
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let s = &self.snapping;
        if !(s.grid_size > 0.0) {
            return Err(SettingsError::invalid("snapping.grid_size", "must be > 0"));
        }
        if !(s.snap_threshold > 0.0) {
            return Err(SettingsError::invalid("snapping.snap_threshold", "must be > 0"));
        }
        if !(s.guide_overhang >= 0.0) {
            return Err(SettingsError::invalid("snapping.guide_overhang", "must be >= 0"));
        }

        let d = &self.doors;
        for (key, value) in [
            ("doors.min_position", d.min_position),
            ("doors.max_position", d.max_position),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::invalid(key, "must be within [0, 1]"));
            }
        }
        if d.min_position >= d.max_position {
            return Err(SettingsError::invalid(
                "doors.min_position",
                "must be less than doors.max_position",
            ));
        }
        if !(d.pick_distance >= 0.0) {
            return Err(SettingsError::invalid("doors.pick_distance", "must be >= 0"));
        }
        if !(d.default_width > 0.0) {
            return Err(SettingsError::invalid("doors.default_width", "must be > 0"));
        }

        if !(self.canvas.mm_per_canvas_unit > 0.0) || !self.canvas.mm_per_canvas_unit.is_finite() {
            return Err(SettingsError::invalid(
                "canvas.mm_per_canvas_unit",
                "must be a positive number",
            ));
        }

        Ok(())
    }

    pub fn snap_config(&self) -> SnapConfig {
        SnapConfig {
            grid_size: self.snapping.grid_size,
            snap_threshold: self.snapping.snap_threshold,
            guide_overhang: self.snapping.guide_overhang,
            enable_grid_snap: self.snapping.enable_grid_snap,
        }
    }

    pub fn door_config(&self) -> DoorConfig {
        DoorConfig {
            min_position: self.doors.min_position,
            max_position: self.doors.max_position,
        }
    }

    pub fn scale(&self) -> Scale {
        Scale::from_mm_per_unit(self.canvas.mm_per_canvas_unit)
    }

    /// A door tool using the configured width and pick distance.
    pub fn door_tool(&self) -> DoorTool {
        DoorTool::new(self.doors.default_width, self.doors.pick_distance)
    }

    /// An empty floor plan for `room` using these settings.
    pub fn new_floor_plan(&self, room: Polygon) -> FloorPlan {
        FloorPlan::new(room, self.scale().factor())
            .with_snap_config(self.snap_config())
            .with_door_config(self.door_config())
    }
}
