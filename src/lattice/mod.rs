//! Ring layout of the lattice.
//!
//! Each grid cell holds a pair of rings tilted ±45° about X ("4-in-1" weave);
//! each row boundary between two layers holds a linker ring standing almost
//! edge-on that threads both layers. Odd layers are mirrored so successive
//! layers hook into each other.

mod orientation;
mod placement;

pub use orientation::Orientation;
pub use placement::RingPlacement;

use crate::config::Config;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tilt of ring A about X; ring B uses the opposite sign.
pub const CELL_TILT_DEG: Real = 45.0;
/// Tilt of an even-layer linker about X before its axis swap.
pub const LINKER_TILT_DEG: Real = 20.0;
/// Rotation about Y that stands a linker on its edge.
pub const LINKER_AXIS_SWAP_DEG: Real = 90.0;

const SPACING_X_WIRE_FACTOR: Real = 2.5;
const SPACING_Z_WIRE_FACTOR: Real = 1.0;
const WEAVE_Y_WIRE_FACTOR: Real = 0.5;
const LINKER_X_WIRE_FACTOR: Real = 1.0;
const LINKER_Y_RING_FACTOR: Real = 0.75;
const LINKER_Z_RING_FACTOR: Real = 0.5;

/// Position of a cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridIndex {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Grid pitch and weave offset, derived once from ring and wire size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    /// Offset of ring B from ring A inside a cell.
    pub weave: Vector3<Real>,
}

impl Spacing {
    pub fn from_ring(ring_id: Real, wire_d: Real) -> Self {
        let x = ring_id + SPACING_X_WIRE_FACTOR * wire_d;
        Self {
            x,
            y: x * 0.5,
            z: ring_id + SPACING_Z_WIRE_FACTOR * wire_d,
            weave: Vector3::new(x * 0.5, ring_id * 0.5 - WEAVE_Y_WIRE_FACTOR * wire_d, 0.0),
        }
    }
}

/// The two interlocking rings of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellUnit {
    pub index: GridIndex,
    pub orientation: Orientation,
    pub rings: [RingPlacement; 2],
}

impl CellUnit {
    /// Ring at the cell origin.
    pub const fn a(&self) -> &RingPlacement {
        &self.rings[0]
    }

    /// Ring at the weave offset.
    pub const fn b(&self) -> &RingPlacement {
        &self.rings[1]
    }
}

/// A ring bridging layer `layer` to `layer + 1` at the boundary after row `row`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkerUnit {
    pub row: usize,
    pub layer: usize,
    pub orientation: Orientation,
    pub ring: RingPlacement,
}

/// Placement of every ring of a lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeLayout {
    cols: usize,
    rows: usize,
    stacks: usize,
    ring_id: Real,
    wire_d: Real,
    spacing: Spacing,
}

impl LatticeLayout {
    /// Non-positive grid counts give an empty layout.
    pub fn new(config: &Config) -> Self {
        let clamp = |n: i32| usize::try_from(n).unwrap_or(0);
        let (cols, rows, stacks) = (clamp(config.cols), clamp(config.rows), clamp(config.stacks));
        let empty = cols == 0 || rows == 0 || stacks == 0;

        Self {
            cols: if empty { 0 } else { cols },
            rows: if empty { 0 } else { rows },
            stacks: if empty { 0 } else { stacks },
            ring_id: config.ring_id,
            wire_d: config.wire_d,
            spacing: Spacing::from_ring(config.ring_id, config.wire_d),
        }
    }

    /// `(cols, rows, stacks)`, all zero for an empty layout.
    pub const fn dims(&self) -> (usize, usize, usize) {
        (self.cols, self.rows, self.stacks)
    }

    pub const fn is_empty(&self) -> bool {
        self.cols == 0
    }

    pub const fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows * self.stacks
    }

    pub const fn linker_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows - 1) * (self.stacks - 1)
    }

    /// X distance from the first ring A to the last ring B of a row.
    pub fn row_width(&self) -> Real {
        self.cols.saturating_sub(1) as Real * self.spacing.x + self.spacing.weave.x
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        index.x < self.cols && index.y < self.rows && index.z < self.stacks
    }

    pub fn cell_origin(&self, index: GridIndex) -> Point3<Real> {
        Point3::new(
            index.x as Real * self.spacing.x,
            index.y as Real * self.spacing.y,
            index.z as Real * self.spacing.z,
        )
    }

    /// The cell at `index`, or `None` outside the grid.
    pub fn cell(&self, index: GridIndex) -> Option<CellUnit> {
        self.contains(index).then(|| self.cell_at(index))
    }

    fn cell_at(&self, index: GridIndex) -> CellUnit {
        let orientation = Orientation::for_layer(index.z);
        let origin = self.cell_origin(index).coords;

        let local = [
            RingPlacement::new(
                Point3::origin(),
                Vector3::new(CELL_TILT_DEG, 0.0, 0.0),
                self.ring_id,
                self.wire_d,
            ),
            RingPlacement::new(
                Point3::from(self.spacing.weave),
                Vector3::new(-CELL_TILT_DEG, 0.0, 0.0),
                self.ring_id,
                self.wire_d,
            ),
        ];

        let rings = local.map(|ring| {
            let mirrored = orientation.reflect_cell(ring);
            RingPlacement { center: mirrored.center + origin, ..mirrored }
        });

        CellUnit { index, orientation, rings }
    }

    /// The linker after row `y` in layer `z`, if that row and layer have successors.
    pub fn linker(&self, y: usize, z: usize) -> Option<LinkerUnit> {
        if self.is_empty() || y + 1 >= self.rows || z + 1 >= self.stacks {
            return None;
        }
        let orientation = Orientation::for_layer(z);
        let primary = RingPlacement::new(
            Point3::new(
                -LINKER_X_WIRE_FACTOR * self.wire_d,
                y as Real * self.spacing.y + LINKER_Y_RING_FACTOR * self.ring_id,
                z as Real * self.spacing.z + LINKER_Z_RING_FACTOR * self.ring_id,
            ),
            Vector3::new(LINKER_TILT_DEG, LINKER_AXIS_SWAP_DEG, 0.0),
            self.ring_id,
            self.wire_d,
        );

        Some(LinkerUnit {
            row: y,
            layer: z,
            orientation,
            ring: orientation.anchor_linker(primary, self.row_width()),
        })
    }

    fn grid_index(&self, i: usize) -> GridIndex {
        GridIndex::new(
            i % self.cols,
            (i / self.cols) % self.rows,
            i / (self.cols * self.rows),
        )
    }

    /// Every cell, ordered by z, then y, then x.
    #[cfg(not(feature = "parallel"))]
    pub fn cells(&self) -> Vec<CellUnit> {
        (0..self.cell_count())
            .map(|i| self.cell_at(self.grid_index(i)))
            .collect()
    }

    /// Every cell, ordered by z, then y, then x.
    #[cfg(feature = "parallel")]
    pub fn cells(&self) -> Vec<CellUnit> {
        (0..self.cell_count())
            .into_par_iter()
            .map(|i| self.cell_at(self.grid_index(i)))
            .collect()
    }

    /// Every linker, ordered by layer, then row.
    pub fn linkers(&self) -> Vec<LinkerUnit> {
        (0..self.stacks)
            .flat_map(|z| (0..self.rows).map(move |y| (y, z)))
            .filter_map(|(y, z)| self.linker(y, z))
            .collect()
    }

    /// Every ring: cell rings (A before B) followed by linkers.
    pub fn rings(&self) -> Vec<RingPlacement> {
        let mut rings: Vec<RingPlacement> =
            self.cells().iter().flat_map(|cell| cell.rings).collect();
        rings.extend(self.linkers().iter().map(|linker| linker.ring));
        rings
    }
}
