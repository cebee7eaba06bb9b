use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

/// Boolean union + rigid placement, the only operations the chainmail
/// pipeline asks of a geometry kernel.
pub trait Solid: Sized + Clone + Send + Sync {
    /// The empty solid, neutral element of [`Solid::union`].
    fn empty() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    /// Axis-aligned bounds of the material, `None` for an empty solid.
    fn bounding_box(&self) -> Option<Aabb>;

    /// Union of any number of solids.
    ///
    /// The default folds pairwise; kernels with an n-ary union should override it.
    fn union_all<I>(solids: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        solids
            .into_iter()
            .fold(Self::empty(), |acc, solid| acc.union(&solid))
    }

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Rotates by x_degrees, y_degrees, z_degrees (X applied first, then Y, then Z).
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        self.transform(&euler_degrees(x_deg, y_deg, z_deg).to_homogeneous())
    }
}

/// Constructors for the three primitive shapes, all centred at the origin.
pub trait Primitives: Solid {
    /// Torus lying in the XY plane around +Z.
    ///
    /// `inner_diameter` is the diameter of the hole; the centre-line radius is
    /// `(inner_diameter + wire_diameter) / 2`.
    fn ring(inner_diameter: Real, wire_diameter: Real) -> Self;

    /// Cylinder along +Z spanning `[-height/2, height/2]`.
    fn cylinder(diameter: Real, height: Real) -> Self;

    /// Box spanning `[-width/2, width/2] × [-length/2, length/2] × [-height/2, height/2]`.
    fn cuboid(width: Real, length: Real, height: Real) -> Self;
}

/// Rotation composed as `Rz · Ry · Rx` from angles in degrees.
pub fn euler_degrees(x_deg: Real, y_deg: Real, z_deg: Real) -> Rotation3<Real> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());
    rz * ry * rx
}
