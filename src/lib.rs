//! Procedural **chainmail** for single-pass, support-free 3D printing.
//!
//! A [`Config`] describes a grid of interlocking rings: each cell holds two rings
//! tilted ±45° (the "4-in-1" weave), odd layers are mirrored so layers hook into
//! each other, and linker rings thread adjacent layers together at the row
//! boundaries. From the lattice's own extents the crate derives the scaffolding
//! that makes it printable in one pass: a base plate, pillars, angled braces,
//! joiner tabs and side walls.
//!
//! The output is a tree of positioned primitives and unions built through the
//! [`Primitives`] trait, so any geometry kernel can resolve it. [`CsgNode`] is
//! the built-in kernel that keeps the tree as data.
//!
//! ```
//! use chainmail::{Chainmail, Config, CsgNode};
//!
//! let design = Chainmail::new(Config::default().with_grid(3, 3, 3));
//! let solid: CsgNode = design.build();
//! assert!(solid.leaf_count() >= 58);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to lay out and render the lattice

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod assembly;
pub mod config;
pub mod csg;
pub mod errors;
pub mod extent;
pub mod float_types;
pub mod lattice;
pub mod scaffold;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use assembly::{Assembly, Chainmail};
pub use config::Config;
pub use csg::CsgNode;
pub use errors::ConfigError;
pub use traits::{Primitives, Solid};
