//! Extent analysis: how far a tilted ring reaches up and down, where it
//! touches down, and the envelope of the whole lattice.

use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::float_types::{EPSILON, Real};
use crate::lattice::RingPlacement;
use nalgebra::Point3;

/// Centre-line radius `major` and tube radius `minor` of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSection {
    pub major: Real,
    pub minor: Real,
}

impl RingSection {
    /// Section of a ring with hole diameter `ring_id` bent from wire `wire_d`.
    pub fn new(ring_id: Real, wire_d: Real) -> Self {
        Self {
            major: (ring_id + wire_d) * 0.5,
            minor: wire_d * 0.5,
        }
    }

    pub fn outer_radius(&self) -> Real {
        self.major + self.minor
    }
}

/// Lowest material Z of a ring tilted `tilt_deg` about X, relative to its centre.
pub fn lowest_z(tilt_deg: Real, section: RingSection) -> Real {
    -highest_z(tilt_deg, section)
}

/// Highest material Z of a ring tilted `tilt_deg` about X, relative to its centre.
pub fn highest_z(tilt_deg: Real, section: RingSection) -> Real {
    section.major * tilt_deg.to_radians().sin().abs() + section.minor
}

/// Y offset, from the ring centre, of the point directly beneath the ring's lowest Z.
///
/// A ring tilted up toward +Y touches down on its −Y side and vice versa; a
/// flat ring has no preferred side.
pub fn contact_y_offset(tilt_deg: Real, section: RingSection) -> Real {
    let (sin, cos) = tilt_deg.to_radians().sin_cos();
    if sin > EPSILON {
        -section.major * cos
    } else if sin < -EPSILON {
        section.major * cos
    } else {
        0.0
    }
}

/// Axis-aligned box around all ring material of a lattice.
///
/// X and Y use each ring's outer radius around its centre; Z uses the exact
/// tilt-aware reach, so `lowest_z` is the level the bottom layer actually
/// touches down on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentEnvelope {
    pub min_x: Real,
    pub max_x: Real,
    pub min_y: Real,
    pub max_y: Real,
    pub lowest_z: Real,
    pub highest_z: Real,
}

impl ExtentEnvelope {
    /// Envelope of a single ring.
    pub fn of_ring(ring: &RingPlacement) -> Self {
        let outer = ring.outer_radius();
        Self {
            min_x: ring.center.x - outer,
            max_x: ring.center.x + outer,
            min_y: ring.center.y - outer,
            max_y: ring.center.y + outer,
            lowest_z: ring.lowest_z(),
            highest_z: ring.highest_z(),
        }
    }

    /// Envelope of every ring, `None` when there are none.
    pub fn from_rings<'a, I>(rings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a RingPlacement>,
    {
        rings
            .into_iter()
            .map(Self::of_ring)
            .reduce(|a, b| a.merged(&b))
    }

    pub fn merged(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
            lowest_z: self.lowest_z.min(other.lowest_z),
            highest_z: self.highest_z.max(other.highest_z),
        }
    }

    /// The same envelope with its footprint grown by `margin` on every side.
    /// Z is left alone.
    pub fn inflated(&self, margin: Real) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
            ..*self
        }
    }

    pub fn width(&self) -> Real {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> Real {
        self.max_y - self.min_y
    }

    pub fn height(&self) -> Real {
        self.highest_z - self.lowest_z
    }

    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(
            Point3::new(self.min_x, self.min_y, self.lowest_z),
            Point3::new(self.max_x, self.max_y, self.highest_z),
        )
    }
}
