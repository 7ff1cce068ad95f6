//! Centroidal Voronoi tessellation primitives.
//!
//! `tessel` is a small numerical kernel that relocates a set of generator
//! nodes to the weighted centroids of the points they own (Lloyd's algorithm)
//! until the nodes stop moving, producing a centroidal Voronoi tessellation
//! (CVT) of a weighted 2D point set.
//!
//! The primary public API is under [`tessellate`], which provides:
//! - Lloyd relaxation over weighted points ([`tessellate::Lloyd`], [`tessellate::relax`])
//! - exact nearest-node lookups backed by a k-d tree ([`tessellate::NodeIndex`])

#![forbid(unsafe_code)]

pub mod error;
pub mod tessellate;

pub use error::{Error, Result};
pub use tessellate::{EmptyNodePolicy, Lloyd, NodeIndex, RoundReport, Tessellation, relax};
