use crate::float_types::{Real, SPAN_TOLERANCE};
use crate::traits::Primitives;
use nalgebra::{Point3, Rotation3, Vector3};

/// Which family a [`SupportElement`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportKind {
    Pillar,
    AngledBrace,
    JoinerTab,
    Wall,
    BasePlate,
}

/// One piece of print scaffolding, carrying just enough to build its primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SupportElement {
    /// Vertical cylinder standing on `base`.
    Pillar {
        base: Point3<Real>,
        height: Real,
        diameter: Real,
    },
    /// Inclined cylinder from `foot` up to `head`.
    AngledBrace {
        foot: Point3<Real>,
        head: Point3<Real>,
        diameter: Real,
    },
    JoinerTab { center: Point3<Real>, size: Vector3<Real> },
    Wall { center: Point3<Real>, size: Vector3<Real> },
    BasePlate { center: Point3<Real>, size: Vector3<Real> },
}

impl SupportElement {
    pub const fn kind(&self) -> SupportKind {
        match self {
            SupportElement::Pillar { .. } => SupportKind::Pillar,
            SupportElement::AngledBrace { .. } => SupportKind::AngledBrace,
            SupportElement::JoinerTab { .. } => SupportKind::JoinerTab,
            SupportElement::Wall { .. } => SupportKind::Wall,
            SupportElement::BasePlate { .. } => SupportKind::BasePlate,
        }
    }

    /// Length of a pillar or brace, `None` for box-shaped elements.
    pub fn span(&self) -> Option<Real> {
        match self {
            SupportElement::Pillar { height, .. } => Some(*height),
            SupportElement::AngledBrace { foot, head, .. } => Some((head - foot).norm()),
            _ => None,
        }
    }

    /// The element as a solid of kernel `S`.
    pub fn render<S: Primitives>(&self) -> S {
        match *self {
            SupportElement::Pillar { base, height, diameter } => S::cylinder(diameter, height)
                .translate(base.x, base.y, base.z + height * 0.5),
            SupportElement::AngledBrace { foot, head, diameter } => {
                let axis = head - foot;
                let tilt = Rotation3::rotation_between(&Vector3::z(), &axis)
                    .unwrap_or_else(Rotation3::identity);
                S::cylinder(diameter, axis.norm())
                    .transform(&tilt.to_homogeneous())
                    .translate_vector(nalgebra::center(&foot, &head).coords)
            },
            SupportElement::JoinerTab { center, size }
            | SupportElement::Wall { center, size }
            | SupportElement::BasePlate { center, size } => {
                S::cuboid(size.x, size.y, size.z).translate_vector(center.coords)
            },
        }
    }
}

/// Centre and size of the box spanning `mins..maxs`, or `None` when any side
/// is no longer than [`SPAN_TOLERANCE`].
pub(crate) fn box_between(
    mins: Point3<Real>,
    maxs: Point3<Real>,
) -> Option<(Point3<Real>, Vector3<Real>)> {
    let size = maxs - mins;
    (size.min() > SPAN_TOLERANCE).then(|| (nalgebra::center(&mins, &maxs), size))
}
