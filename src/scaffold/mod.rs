//! Print scaffolding derived from the lattice's own geometry.
//!
//! Three independently toggled families:
//! - **foundation** (`add_base_plate_and_supports`): base plate, pillars under
//!   the bottom layer, 45° braces under the upper linkers
//! - **joiners** (`add_support_joiners`): tabs between stacked cell layers
//! - **walls** (`add_side_walls`): slabs at the minimum-X and maximum-X sides
//!
//! Every function here is pure; switching a family off removes exactly its
//! elements and nothing else.

mod element;

pub use element::{SupportElement, SupportKind};

use crate::config::Config;
use crate::extent::{ExtentEnvelope, contact_y_offset};
use crate::float_types::{Real, SPAN_TOLERANCE, SQRT_2};
use crate::lattice::{GridIndex, LatticeLayout, LinkerUnit, RingPlacement};
use element::box_between;
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// All scaffolding of a lattice, grouped by toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportSet {
    /// Base plate, pillars and braces.
    pub foundation: Vec<SupportElement>,
    pub joiners: Vec<SupportElement>,
    pub walls: Vec<SupportElement>,
}

impl SupportSet {
    /// Every element, foundation first, then joiners, then walls.
    pub fn iter(&self) -> impl Iterator<Item = &SupportElement> {
        self.foundation
            .iter()
            .chain(self.joiners.iter())
            .chain(self.walls.iter())
    }

    pub fn len(&self) -> usize {
        self.foundation.len() + self.joiners.len() + self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, kind: SupportKind) -> usize {
        self.iter().filter(|element| element.kind() == kind).count()
    }
}

/// Derive every enabled scaffold family. An empty lattice (no envelope) gets none.
pub fn synthesize(
    layout: &LatticeLayout,
    envelope: Option<&ExtentEnvelope>,
    config: &Config,
) -> SupportSet {
    let Some(envelope) = envelope else {
        return SupportSet::default();
    };

    let mut set = SupportSet::default();
    if config.add_base_plate_and_supports {
        set.foundation.extend(base_plate(envelope, config));
        set.foundation.extend(pillars(layout, envelope, config));
        set.foundation.extend(braces(layout, envelope, config));
    }
    if config.add_support_joiners {
        set.joiners = joiners(layout, config);
    }
    if config.add_side_walls {
        set.walls = walls(envelope, config);
    }

    debug!(
        foundation = set.foundation.len(),
        joiners = set.joiners.len(),
        walls = set.walls.len(),
        "synthesized scaffolding"
    );
    set
}

/// Z of the plate's top surface: `plate_gap` below the lowest ring material.
pub fn plate_top(envelope: &ExtentEnvelope, config: &Config) -> Real {
    envelope.lowest_z - config.plate_gap
}

/// Slab under the whole footprint (grown by `margin`) with its top at [`plate_top`].
pub fn base_plate(envelope: &ExtentEnvelope, config: &Config) -> Option<SupportElement> {
    let footprint = envelope.inflated(config.margin);
    let top = plate_top(envelope, config);
    box_between(
        Point3::new(footprint.min_x, footprint.min_y, top - config.plate_thickness),
        Point3::new(footprint.max_x, footprint.max_y, top),
    )
    .map(|(center, size)| SupportElement::BasePlate { center, size })
}

/// Vertical pillar from the plate up to `ring`'s contact point, if it spans
/// more than [`SPAN_TOLERANCE`].
pub fn pillar(ring: &RingPlacement, plate_top: Real, diameter: Real) -> Option<SupportElement> {
    let contact = ring.contact_point();
    let height = contact.z - plate_top;
    if height <= SPAN_TOLERANCE {
        debug!(?contact, height, "dropping degenerate pillar");
        return None;
    }
    Some(SupportElement::Pillar {
        base: Point3::new(contact.x, contact.y, plate_top),
        height,
        diameter,
    })
}

/// Pillars under every bottom-layer cell ring and every bottom-layer linker.
pub fn pillars(
    layout: &LatticeLayout,
    envelope: &ExtentEnvelope,
    config: &Config,
) -> Vec<SupportElement> {
    let top = plate_top(envelope, config);
    let (cols, rows, _) = layout.dims();

    let cell_rings = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| GridIndex::new(x, y, 0)))
        .filter_map(|index| layout.cell(index))
        .flat_map(|cell| cell.rings);
    let linker_rings = (0..rows).filter_map(|y| layout.linker(y, 0)).map(|linker| linker.ring);

    cell_rings
        .chain(linker_rings)
        .filter_map(|ring| pillar(&ring, top, config.pillar_diameter))
        .collect()
}

/// 45° brace from an upper linker's contact point down toward the side of
/// `footprint` its layer is anchored to, stopping at the plate.
///
/// `footprint` is the envelope grown by the margin: the plate's edge and the
/// walls' outer faces, so the foot lands on one of them.
pub fn brace(
    linker: &LinkerUnit,
    footprint: &ExtentEnvelope,
    plate_top: Real,
    diameter: Real,
) -> Option<SupportElement> {
    let head = linker.ring.contact_point();
    let side = linker.orientation.anchor_side();
    let boundary = if side < 0.0 { footprint.min_x } else { footprint.max_x };

    let run = (boundary - head.x).abs();
    let drop = run.min(head.z - plate_top);
    let length = SQRT_2 * drop;
    if drop <= SPAN_TOLERANCE || length <= SPAN_TOLERANCE {
        debug!(row = linker.row, layer = linker.layer, drop, "dropping degenerate brace");
        return None;
    }

    Some(SupportElement::AngledBrace {
        foot: Point3::new(head.x + side * drop, head.y, head.z - drop),
        head,
        diameter,
    })
}

/// Braces for every linker above the bottom layer; pillars cannot reach those
/// past the layers in between.
pub fn braces(
    layout: &LatticeLayout,
    envelope: &ExtentEnvelope,
    config: &Config,
) -> Vec<SupportElement> {
    let top = plate_top(envelope, config);
    let footprint = envelope.inflated(config.margin);
    layout
        .linkers()
        .iter()
        .filter(|linker| linker.layer >= 1)
        .filter_map(|linker| brace(linker, &footprint, top, config.brace_diameter))
        .collect()
}

/// A tab halfway between every cell layer and the one above it, under each
/// ring's contact point in the upper layer.
///
/// The contact side is taken from the upper layer's tilt: mirroring flips it.
pub fn joiners(layout: &LatticeLayout, config: &Config) -> Vec<SupportElement> {
    let spacing = layout.spacing();
    let half = Vector3::new(config.joiner_width, config.joiner_depth, config.joiner_height) * 0.5;
    let mut tabs = Vec::new();

    for lower in layout.cells() {
        let above = GridIndex::new(lower.index.x, lower.index.y, lower.index.z + 1);
        let Some(upper) = layout.cell(above) else {
            continue;
        };
        let mid_z = layout.cell_origin(lower.index).z + spacing.z * 0.5;

        for (ring, upper_ring) in lower.rings.iter().zip(upper.rings.iter()) {
            let y = ring.center.y + contact_y_offset(upper_ring.tilt(), upper_ring.section());
            let center = Point3::new(ring.center.x, y, mid_z);
            tabs.extend(
                box_between(center - half, center + half)
                    .map(|(center, size)| SupportElement::JoinerTab { center, size }),
            );
        }
    }
    tabs
}

/// Two slabs whose outer faces sit `margin` outside the envelope's X bounds,
/// running the full depth of the footprint, from the plate top to
/// `wall_extension` above the highest ring.
pub fn walls(envelope: &ExtentEnvelope, config: &Config) -> Vec<SupportElement> {
    let footprint = envelope.inflated(config.margin);
    let bottom = plate_top(envelope, config);
    let top = envelope.highest_z + config.wall_extension;
    let thickness = config.wall_thickness;

    [
        (footprint.min_x, footprint.min_x + thickness),
        (footprint.max_x - thickness, footprint.max_x),
    ]
    .into_iter()
    .filter_map(|(x0, x1)| {
        box_between(
            Point3::new(x0, footprint.min_y, bottom),
            Point3::new(x1, footprint.max_y, top),
        )
    })
    .map(|(center, size)| SupportElement::Wall { center, size })
    .collect()
}
