mod support;

use approx::assert_relative_eq;
use chainmail::{
    Assembly, Chainmail, Config, CsgNode, Primitives, Solid,
    csg::Primitive,
    float_types::{Real, parry3d::bounding_volume::Aabb},
    scaffold::SupportKind,
};
use nalgebra::Matrix4;

use crate::support::{config, init_tracing, toggle_combinations};

#[test]
fn default_grid_has_one_hundred_nineteen_primitives() {
    init_tracing();
    let solid: CsgNode = Chainmail::new(config(3, 3, 3)).build();
    let leaves = solid.leaves();
    assert_eq!(leaves.len(), 58 + 61);

    let tori = leaves
        .iter()
        .filter(|leaf| matches!(leaf.primitive, Primitive::Torus { .. }))
        .count();
    let cylinders = leaves
        .iter()
        .filter(|leaf| matches!(leaf.primitive, Primitive::Cylinder { .. }))
        .count();
    let cuboids = leaves
        .iter()
        .filter(|leaf| matches!(leaf.primitive, Primitive::Cuboid { .. }))
        .count();
    assert_eq!(tori, 58);
    assert_eq!(cylinders, 20 + 2);
    assert_eq!(cuboids, 1 + 36 + 2);
}

#[test]
fn lattice_is_independent_of_the_toggles() {
    let reference: CsgNode = Chainmail::new(config(2, 3, 3)).assemble::<CsgNode>().lattice;
    for cfg in toggle_combinations(&config(2, 3, 3)) {
        let assembly: Assembly<CsgNode> = Chainmail::new(cfg).assemble();
        assert_eq!(assembly.lattice, reference);
    }
}

#[test]
fn each_toggle_adds_exactly_its_own_subtree() {
    let full: Assembly<CsgNode> = Chainmail::new(config(2, 3, 3)).assemble();

    for cfg in toggle_combinations(&config(2, 3, 3)) {
        let assembly: Assembly<CsgNode> = Chainmail::new(cfg.clone()).assemble();
        assert_eq!(assembly.foundation.is_some(), cfg.add_base_plate_and_supports);
        assert_eq!(assembly.joiners.is_some(), cfg.add_support_joiners);
        assert_eq!(assembly.walls.is_some(), cfg.add_side_walls);

        if let Some(foundation) = &assembly.foundation {
            assert_eq!(Some(foundation), full.foundation.as_ref());
        }
        if let Some(joiners) = &assembly.joiners {
            assert_eq!(Some(joiners), full.joiners.as_ref());
        }
        if let Some(walls) = &assembly.walls {
            assert_eq!(Some(walls), full.walls.as_ref());
        }

        let expected = 1
            + usize::from(cfg.add_base_plate_and_supports)
            + usize::from(cfg.add_support_joiners)
            + usize::from(cfg.add_side_walls);
        assert_eq!(assembly.subtrees().count(), expected);
    }
}

#[test]
fn rendered_subtrees_match_the_support_set() {
    let design = Chainmail::new(config(3, 3, 3));
    let assembly: Assembly<CsgNode> = design.assemble();
    let supports = design.supports();

    let leaves = |node: &Option<CsgNode>| node.as_ref().map_or(0, CsgNode::leaf_count);
    assert_eq!(assembly.lattice.leaf_count(), design.layout().rings().len());
    assert_eq!(leaves(&assembly.foundation), supports.foundation.len());
    assert_eq!(leaves(&assembly.joiners), supports.count(SupportKind::JoinerTab));
    assert_eq!(leaves(&assembly.walls), supports.count(SupportKind::Wall));
}

#[test]
fn ring_leaves_are_placed_at_their_centres() {
    let design = Chainmail::new(config(2, 2, 2));
    let lattice: CsgNode = design.assemble::<CsgNode>().lattice;

    for (leaf, ring) in lattice.leaves().iter().zip(design.layout().rings()) {
        assert_relative_eq!(leaf.origin(), ring.center, epsilon = 1e-12);
        let expected = ring.rotation_matrix().to_homogeneous();
        assert_relative_eq!(
            leaf.matrix.fixed_view::<3, 3>(0, 0).into_owned(),
            expected.fixed_view::<3, 3>(0, 0).into_owned(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn lattice_bounds_agree_with_the_envelope() {
    let design = Chainmail::new(Config::lattice_only().with_grid(3, 3, 3));
    let env = *design.envelope().unwrap();
    let solid: CsgNode = design.build();
    let bounds = solid.bounding_box().unwrap();

    assert_relative_eq!(bounds.mins.z, env.lowest_z, epsilon = 1e-9);
    assert_relative_eq!(bounds.maxs.z, env.highest_z, epsilon = 1e-9);
    // the envelope's footprint is a sphere bound, so it may only be looser
    assert!(bounds.mins.x >= env.min_x - 1e-9);
    assert!(bounds.maxs.x <= env.max_x + 1e-9);
    assert_relative_eq!(bounds.mins.x, -7.0, epsilon = 1e-9);
    assert!(bounds.mins.y >= env.min_y - 1e-9);
    assert!(bounds.maxs.y <= env.max_y + 1e-9);
}

#[test]
fn scaffolding_extends_the_bounds_outward() {
    let design = Chainmail::new(config(3, 3, 3));
    let env = *design.envelope().unwrap();
    let solid: CsgNode = design.build();
    let bounds = solid.bounding_box().unwrap();

    let plate_bottom = env.lowest_z - 0.4 - 1.2;
    assert_relative_eq!(bounds.mins.z, plate_bottom, epsilon = 1e-9);
    assert_relative_eq!(bounds.maxs.z, env.highest_z + 1.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.mins.x, -11.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.maxs.x, 48.5, epsilon = 1e-9);
}

#[test]
fn builds_are_deterministic() {
    let cfg = config(3, 2, 4);
    let a: CsgNode = Chainmail::new(cfg.clone()).build();
    let b: CsgNode = Chainmail::new(cfg).build();
    assert_eq!(a, b);
}

#[test]
fn empty_grid_builds_an_empty_solid() {
    let solid: CsgNode = Chainmail::new(config(3, 0, 3)).build();
    assert!(solid.is_empty());
    assert!(solid.bounding_box().is_none());
}

/// A kernel that only tallies what it is asked to build.
#[derive(Debug, Clone, Default, PartialEq)]
struct Census {
    rings: usize,
    cylinders: usize,
    cuboids: usize,
    transforms: usize,
}

impl Solid for Census {
    fn empty() -> Self {
        Self::default()
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            rings: self.rings + other.rings,
            cylinders: self.cylinders + other.cylinders,
            cuboids: self.cuboids + other.cuboids,
            transforms: self.transforms + other.transforms,
        }
    }

    fn transform(&self, _matrix: &Matrix4<Real>) -> Self {
        Self { transforms: self.transforms + 1, ..self.clone() }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        None
    }
}

impl Primitives for Census {
    fn ring(_inner_diameter: Real, _wire_diameter: Real) -> Self {
        Self { rings: 1, ..Self::default() }
    }

    fn cylinder(_diameter: Real, _height: Real) -> Self {
        Self { cylinders: 1, ..Self::default() }
    }

    fn cuboid(_width: Real, _length: Real, _height: Real) -> Self {
        Self { cuboids: 1, ..Self::default() }
    }
}

#[test]
fn any_kernel_can_resolve_the_tree() {
    let census: Census = Chainmail::new(config(3, 3, 3)).build();
    assert_eq!(census.rings, 58);
    assert_eq!(census.cylinders, 22);
    assert_eq!(census.cuboids, 39);
    assert!(census.transforms >= census.rings + census.cylinders + census.cuboids);
}
