//! [`RingPlacement`]: one positioned ring of the lattice.

use crate::extent::RingSection;
use crate::float_types::{EPSILON, Real};
use crate::traits::{Primitives, euler_degrees};
use nalgebra::{Point3, Rotation3, Vector3};

/// A ring placed in the world: rotated about its own centre, then moved to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlacement {
    pub center: Point3<Real>,
    /// Euler angles in degrees, applied X first, then Y, then Z.
    pub rotation: Vector3<Real>,
    /// Inner (hole) diameter.
    pub major_diameter: Real,
    pub wire_diameter: Real,
}

impl RingPlacement {
    pub const fn new(
        center: Point3<Real>,
        rotation: Vector3<Real>,
        major_diameter: Real,
        wire_diameter: Real,
    ) -> Self {
        Self { center, rotation, major_diameter, wire_diameter }
    }

    pub fn section(&self) -> RingSection {
        RingSection::new(self.major_diameter, self.wire_diameter)
    }

    /// Distance from the centre to the farthest material in any direction.
    pub fn outer_radius(&self) -> Real {
        self.section().outer_radius()
    }

    /// Tilt about the X axis in degrees.
    pub fn tilt(&self) -> Real {
        self.rotation.x
    }

    pub fn rotation_matrix(&self) -> Rotation3<Real> {
        euler_degrees(self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Unit normal of the ring's plane.
    pub fn axis(&self) -> Vector3<Real> {
        self.rotation_matrix() * Vector3::z()
    }

    /// Half of the ring's vertical extent: `R·√(1 − n_z²) + r`.
    pub fn z_half_extent(&self) -> Real {
        let section = self.section();
        let n_z = self.axis().z;
        section.major * (1.0 - n_z * n_z).max(0.0).sqrt() + section.minor
    }

    pub fn lowest_z(&self) -> Real {
        self.center.z - self.z_half_extent()
    }

    pub fn highest_z(&self) -> Real {
        self.center.z + self.z_half_extent()
    }

    /// Lowest point of the ring's material.
    ///
    /// This is the centre-line point of steepest descent, dropped by the tube
    /// radius. A ring lying flat has no single lowest point; its contact is taken
    /// directly under the centre.
    pub fn contact_point(&self) -> Point3<Real> {
        let section = self.section();
        let n = self.axis();
        let down = -Vector3::z();
        let descent = down - n * n.dot(&down);
        let norm = descent.norm();

        let lateral = if norm > EPSILON {
            descent * (section.major / norm)
        } else {
            Vector3::zeros()
        };
        let contact = self.center + lateral;
        Point3::new(contact.x, contact.y, self.lowest_z())
    }

    /// The ring as a solid of kernel `S`.
    pub fn render<S: Primitives>(&self) -> S {
        S::ring(self.major_diameter, self.wire_diameter)
            .rotate(self.rotation.x, self.rotation.y, self.rotation.z)
            .translate_vector(self.center.coords)
    }
}
