//! `CsgNode`: an explicit CSG tree implementing [`Solid`] and [`Primitives`].
//!
//! Nothing is tessellated here. The tree is what an external backend resolves
//! into a boundary mesh; it is also what the tests inspect.

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::traits::{Primitives, Solid};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// A leaf shape, centred at the origin in its own frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Torus { inner_diameter: Real, wire_diameter: Real },
    Cylinder { diameter: Real, height: Real },
    Cuboid { size: Vector3<Real> },
}

impl Primitive {
    /// Exact axis-aligned bounds of this leaf after `matrix` is applied.
    ///
    /// Exact for rigid and scaled placements of the cylinder and cuboid; for the
    /// torus the tube is swept as an ellipsoid, which is exact for rigid placements.
    pub fn bounding_box(&self, matrix: &Matrix4<Real>) -> Aabb {
        let linear: Matrix3<Real> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let center = Point3::from(matrix.fixed_view::<3, 1>(0, 3).into_owned());
        let u = linear.column(0).into_owned();
        let v = linear.column(1).into_owned();
        let w = linear.column(2).into_owned();

        let half = match *self {
            Primitive::Torus { inner_diameter, wire_diameter } => {
                let major = (inner_diameter + wire_diameter) * 0.5;
                let minor = wire_diameter * 0.5;
                Vector3::from_fn(|i, _| {
                    major * disc_extent(u[i], v[i])
                        + minor * Vector3::new(u[i], v[i], w[i]).norm()
                })
            },
            Primitive::Cylinder { diameter, height } => Vector3::from_fn(|i, _| {
                diameter * 0.5 * disc_extent(u[i], v[i]) + (w[i] * height * 0.5).abs()
            }),
            Primitive::Cuboid { size } => Vector3::from_fn(|i, _| {
                (u[i] * size.x * 0.5).abs()
                    + (v[i] * size.y * 0.5).abs()
                    + (w[i] * size.z * 0.5).abs()
            }),
        };

        Aabb::new(center - half, center + half)
    }
}

// Half-extent along one axis of a unit circle spanned by two basis vectors.
fn disc_extent(a: Real, b: Real) -> Real {
    (a * a + b * b).sqrt()
}

/// A node of the CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgNode {
    Empty,
    Leaf(Primitive),
    Transform { matrix: Matrix4<Real>, child: Box<CsgNode> },
    Union(Vec<CsgNode>),
}

/// A leaf together with the accumulated transform that places it in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPrimitive {
    pub matrix: Matrix4<Real>,
    pub primitive: Primitive,
}

impl PlacedPrimitive {
    /// World position of the leaf's local origin.
    pub fn origin(&self) -> Point3<Real> {
        Point3::from(self.matrix.fixed_view::<3, 1>(0, 3).into_owned())
    }

    pub fn bounding_box(&self) -> Aabb {
        self.primitive.bounding_box(&self.matrix)
    }
}

impl CsgNode {
    /// Every leaf of the tree with its world transform, in depth-first order.
    pub fn leaves(&self) -> Vec<PlacedPrimitive> {
        let mut out = Vec::new();
        self.collect_leaves(&Matrix4::identity(), &mut out);
        out
    }

    fn collect_leaves(&self, parent: &Matrix4<Real>, out: &mut Vec<PlacedPrimitive>) {
        match self {
            CsgNode::Empty => {},
            CsgNode::Leaf(primitive) => out.push(PlacedPrimitive {
                matrix: *parent,
                primitive: *primitive,
            }),
            CsgNode::Transform { matrix, child } => {
                child.collect_leaves(&(parent * matrix), out)
            },
            CsgNode::Union(children) => {
                for child in children {
                    child.collect_leaves(parent, out);
                }
            },
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            CsgNode::Empty => 0,
            CsgNode::Leaf(_) => 1,
            CsgNode::Transform { child, .. } => child.leaf_count(),
            CsgNode::Union(children) => children.iter().map(CsgNode::leaf_count).sum(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, CsgNode::Empty)
    }

    // Absorb `node` into a flat list of union operands.
    fn push_operand(operands: &mut Vec<CsgNode>, node: CsgNode) {
        match node {
            CsgNode::Empty => {},
            CsgNode::Union(children) => operands.extend(children),
            other => operands.push(other),
        }
    }

    fn from_operands(mut operands: Vec<CsgNode>) -> CsgNode {
        match operands.len() {
            0 => CsgNode::Empty,
            1 => operands.pop().unwrap_or(CsgNode::Empty),
            _ => CsgNode::Union(operands),
        }
    }
}

impl Solid for CsgNode {
    fn empty() -> Self {
        CsgNode::Empty
    }

    fn union(&self, other: &Self) -> Self {
        let mut operands = Vec::new();
        Self::push_operand(&mut operands, self.clone());
        Self::push_operand(&mut operands, other.clone());
        Self::from_operands(operands)
    }

    /// Builds a single flat union node instead of nesting pairwise unions.
    fn union_all<I>(solids: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut operands = Vec::new();
        for solid in solids {
            Self::push_operand(&mut operands, solid);
        }
        Self::from_operands(operands)
    }

    /// Consecutive transforms are folded into one matrix.
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        match self {
            CsgNode::Empty => CsgNode::Empty,
            CsgNode::Transform { matrix: inner, child } => CsgNode::Transform {
                matrix: matrix * inner,
                child: child.clone(),
            },
            other => CsgNode::Transform {
                matrix: *matrix,
                child: Box::new(other.clone()),
            },
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.leaves()
            .iter()
            .map(PlacedPrimitive::bounding_box)
            .reduce(|a, b| Aabb::new(a.mins.inf(&b.mins), a.maxs.sup(&b.maxs)))
    }
}

impl Primitives for CsgNode {
    fn ring(inner_diameter: Real, wire_diameter: Real) -> Self {
        CsgNode::Leaf(Primitive::Torus { inner_diameter, wire_diameter })
    }

    fn cylinder(diameter: Real, height: Real) -> Self {
        CsgNode::Leaf(Primitive::Cylinder { diameter, height })
    }

    fn cuboid(width: Real, length: Real, height: Real) -> Self {
        CsgNode::Leaf(Primitive::Cuboid {
            size: Vector3::new(width, length, height),
        })
    }
}
