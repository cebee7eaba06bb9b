//! The [`Config`] record every stage of the pipeline is derived from.

use crate::errors::ConfigError;
use crate::float_types::{MM, Real};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lattice dimensions, ring/wire sizes, scaffold toggles and their sub-parameters.
///
/// All lengths are in model units (millimetres by convention). Grid counts are
/// signed so that a loader can pass through whatever it read; zero or negative
/// counts simply produce an empty lattice.
///
/// Missing fields fall back to [`Config::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inner diameter of every ring.
    pub ring_id: Real,
    /// Wire thickness of every ring.
    pub wire_d: Real,
    /// Cells along X.
    pub cols: i32,
    /// Cells along Y.
    pub rows: i32,
    /// Layers along Z.
    pub stacks: i32,

    /// Base plate, bottom-layer pillars and linker braces.
    pub add_base_plate_and_supports: bool,
    /// Perimeter walls at the minimum-X and maximum-X sides.
    pub add_side_walls: bool,
    /// Tabs bridging vertically adjacent cell layers.
    pub add_support_joiners: bool,

    /// Vertical clearance between the lowest ring material and the plate top.
    pub plate_gap: Real,
    pub plate_thickness: Real,
    /// Footprint inflation used by the plate and the walls.
    pub margin: Real,
    pub pillar_diameter: Real,
    pub brace_diameter: Real,
    pub wall_thickness: Real,
    /// How far the walls rise above the highest ring material.
    pub wall_extension: Real,
    /// Joiner tab size along X.
    pub joiner_width: Real,
    /// Joiner tab size along Y.
    pub joiner_depth: Real,
    /// Joiner tab size along Z.
    pub joiner_height: Real,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_id: 10.0 * MM,
            wire_d: 2.0 * MM,
            cols: 3,
            rows: 3,
            stacks: 3,
            add_base_plate_and_supports: true,
            add_side_walls: true,
            add_support_joiners: true,
            plate_gap: 0.4 * MM,
            plate_thickness: 1.2 * MM,
            margin: 2.0 * MM,
            pillar_diameter: 1.0 * MM,
            brace_diameter: 1.0 * MM,
            wall_thickness: 1.0 * MM,
            wall_extension: 1.0 * MM,
            joiner_width: 1.0 * MM,
            joiner_depth: 1.0 * MM,
            joiner_height: 2.0 * MM,
        }
    }
}

impl Config {
    /// Bare lattice: every scaffold family switched off.
    pub fn lattice_only() -> Self {
        Self {
            add_base_plate_and_supports: false,
            add_side_walls: false,
            add_support_joiners: false,
            ..Self::default()
        }
    }

    /// Same record with a different grid size.
    pub fn with_grid(self, cols: i32, rows: i32, stacks: i32) -> Self {
        Self { cols, rows, stacks, ..self }
    }

    /// Reject records that cannot describe printable geometry.
    ///
    /// Grid counts are not checked: non-positive counts are a valid way of
    /// asking for an empty lattice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ring_id", self.ring_id),
            ("wire_d", self.wire_d),
            ("pillar_diameter", self.pillar_diameter),
            ("brace_diameter", self.brace_diameter),
        ];
        let non_negative = [
            ("plate_gap", self.plate_gap),
            ("plate_thickness", self.plate_thickness),
            ("margin", self.margin),
            ("wall_thickness", self.wall_thickness),
            ("wall_extension", self.wall_extension),
            ("joiner_width", self.joiner_width),
            ("joiner_depth", self.joiner_depth),
            ("joiner_height", self.joiner_height),
        ];

        for &(field, value) in positive.iter().chain(non_negative.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.add_side_walls && self.wall_thickness > self.margin {
            warn!(
                wall_thickness = self.wall_thickness,
                margin = self.margin,
                "side walls are thicker than the margin and will cut into the lattice"
            );
        }
        Ok(())
    }
}
