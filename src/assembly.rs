//! The pipeline root and the final union.

use crate::config::Config;
use crate::extent::ExtentEnvelope;
use crate::lattice::{LatticeLayout, RingPlacement};
use crate::scaffold::{self, SupportElement, SupportSet};
use crate::traits::{Primitives, Solid};
use std::sync::OnceLock;
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A chainmail design: one [`Config`] and everything derived from it.
///
/// The layout is built eagerly; the envelope and the scaffolding are computed
/// on first use and then reused.
#[derive(Debug, Clone)]
pub struct Chainmail {
    config: Config,
    layout: LatticeLayout,
    envelope: OnceLock<Option<ExtentEnvelope>>,
    supports: OnceLock<SupportSet>,
}

impl Chainmail {
    pub fn new(config: Config) -> Self {
        let layout = LatticeLayout::new(&config);
        Self {
            config,
            layout,
            envelope: OnceLock::new(),
            supports: OnceLock::new(),
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn layout(&self) -> &LatticeLayout {
        &self.layout
    }

    /// Envelope of all ring material, `None` for an empty lattice.
    pub fn envelope(&self) -> Option<&ExtentEnvelope> {
        self.envelope
            .get_or_init(|| ExtentEnvelope::from_rings(&self.layout.rings()))
            .as_ref()
    }

    pub fn supports(&self) -> &SupportSet {
        self.supports
            .get_or_init(|| scaffold::synthesize(&self.layout, self.envelope(), &self.config))
    }

    /// Render the lattice and every enabled scaffold family as separate subtrees.
    pub fn assemble<S: Primitives>(&self) -> Assembly<S> {
        let lattice = render_rings::<S>(&self.layout.rings());
        let supports = self.supports();

        let assembly = Assembly {
            lattice,
            foundation: self
                .config
                .add_base_plate_and_supports
                .then(|| render_supports(&supports.foundation)),
            joiners: self
                .config
                .add_support_joiners
                .then(|| render_supports(&supports.joiners)),
            walls: self.config.add_side_walls.then(|| render_supports(&supports.walls)),
        };

        info!(
            cells = self.layout.cell_count(),
            linkers = self.layout.linker_count(),
            supports = supports.len(),
            "assembled chainmail"
        );
        assembly
    }

    /// The whole design as one solid.
    pub fn build<S: Primitives>(&self) -> S {
        self.assemble::<S>().into_solid()
    }
}

/// Rendered subtrees of a design. A scaffold subtree is `Some` exactly when
/// its toggle is on.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly<S> {
    pub lattice: S,
    pub foundation: Option<S>,
    pub joiners: Option<S>,
    pub walls: Option<S>,
}

impl<S: Solid> Assembly<S> {
    /// The lattice followed by each present scaffold subtree.
    pub fn subtrees(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.lattice)
            .chain(self.foundation.as_ref())
            .chain(self.joiners.as_ref())
            .chain(self.walls.as_ref())
    }

    /// Union of every subtree.
    pub fn into_solid(self) -> S {
        let Assembly { lattice, foundation, joiners, walls } = self;
        S::union_all(
            std::iter::once(lattice)
                .chain(foundation)
                .chain(joiners)
                .chain(walls),
        )
    }
}

/// Union of every ring.
#[cfg(not(feature = "parallel"))]
pub fn render_rings<S: Primitives>(rings: &[RingPlacement]) -> S {
    S::union_all(rings.iter().map(RingPlacement::render::<S>))
}

/// Union of every ring, rendered in parallel.
#[cfg(feature = "parallel")]
pub fn render_rings<S: Primitives>(rings: &[RingPlacement]) -> S {
    let solids: Vec<S> = rings.par_iter().map(RingPlacement::render::<S>).collect();
    S::union_all(solids)
}

/// Union of a list of scaffold elements.
pub fn render_supports<S: Primitives>(elements: &[SupportElement]) -> S {
    S::union_all(elements.iter().map(SupportElement::render::<S>))
}
