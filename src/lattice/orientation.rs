//! Layer parity as a type.
//!
//! Every parity-dependent rule of the weave lives here: cell mirroring, linker
//! anchoring and the side a brace leans toward.

use super::RingPlacement;
use crate::float_types::Real;
use nalgebra::Vector3;

/// How a layer is laid out, chosen by the parity of its z index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Even layers: cells as designed, linkers anchored near minimum X.
    Primary,
    /// Odd layers: cells reflected through their local z = 0 plane, linkers
    /// anchored near maximum X with the opposite tilt.
    Mirrored,
}

impl Orientation {
    pub const fn for_layer(z: usize) -> Self {
        if z % 2 == 0 {
            Orientation::Primary
        } else {
            Orientation::Mirrored
        }
    }

    pub const fn is_mirrored(self) -> bool {
        matches!(self, Orientation::Mirrored)
    }

    /// `+1` for primary layers, `-1` for mirrored ones.
    pub const fn sign(self) -> Real {
        match self {
            Orientation::Primary => 1.0,
            Orientation::Mirrored => -1.0,
        }
    }

    /// X direction of the side boundary this layer's linkers are anchored to:
    /// `-1` (minimum X) for primary layers, `+1` (maximum X) for mirrored ones.
    pub const fn anchor_side(self) -> Real {
        -self.sign()
    }

    /// Reflect a cell-local placement through the plane z = 0.
    ///
    /// A reflection `M = diag(1, 1, -1)` conjugates `Rz·Ry·Rx` into
    /// `Rz·Ry(-y)·Rx(-x)`, and a torus is symmetric about its own plane, so the
    /// mirrored ring is again a rigid placement.
    pub fn reflect_cell(self, local: RingPlacement) -> RingPlacement {
        match self {
            Orientation::Primary => local,
            Orientation::Mirrored => {
                let mut center = local.center;
                center.z = -center.z;
                let rotation = Vector3::new(-local.rotation.x, -local.rotation.y, local.rotation.z);
                RingPlacement { center, rotation, ..local }
            },
        }
    }

    /// Move a linker from the minimum-X edge to the maximum-X edge of a row
    /// `row_width` wide, flipping its tilt.
    pub fn anchor_linker(self, placement: RingPlacement, row_width: Real) -> RingPlacement {
        match self {
            Orientation::Primary => placement,
            Orientation::Mirrored => {
                let mut center = placement.center;
                center.x = row_width - center.x;
                let mut rotation = placement.rotation;
                rotation.x = -rotation.x;
                RingPlacement { center, rotation, ..placement }
            },
        }
    }
}
