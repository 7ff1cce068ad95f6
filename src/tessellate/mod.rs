//! Centroidal Voronoi tessellation of weighted 2D point sets.
//!
//! A Voronoi tessellation partitions the plane among a set of generator
//! nodes: each point belongs to the node it is closest to. A *centroidal*
//! Voronoi tessellation (CVT) is the fixed point where every node sits at
//! the weighted centroid of the points in its own cell.
//!
//! ## The Algorithm
//!
//! Lloyd's algorithm approaches a CVT by alternating two steps until the
//! nodes stop moving:
//!
//! 1. **Assign**: map every point to its nearest node (exact nearest
//!    neighbor over squared Euclidean distance).
//! 2. **Update**: move every node to the weighted centroid of the points it
//!    was assigned.
//!
//! With per-point weights set to (S/N)² this yields the equal-mass Voronoi
//! binning of Cappellari & Copin (2003), where S/N is a signal-to-noise
//! estimate supplied by the caller.
//!
//! ## Convergence
//!
//! A round's displacement is the sum over nodes of the squared distance
//! moved. The loop stops successfully when displacement is *exactly* zero
//! (node positions reproduce themselves bit for bit), or unsuccessfully once
//! the iteration budget is exhausted. Budget exhaustion is a normal outcome
//! reported through [`Tessellation::converged`], not an error.
//!
//! ## Usage
//!
//! ```rust
//! use tessel::tessellate::Lloyd;
//!
//! let points = vec![[0.0, 0.0], [2.0, 0.0], [10.0, 0.0], [12.0, 0.0]];
//! let weights = vec![1.0, 1.0, 1.0, 1.0];
//! let seeds = vec![[1.0, 0.0], [11.0, 0.0]];
//!
//! let cvt = Lloyd::new(16).tessellate(&points, &weights, &seeds).unwrap();
//! assert!(cvt.converged);
//! assert_eq!(cvt.assignment, vec![0, 0, 1, 1]);
//! ```

mod index;
mod lloyd;

pub use index::NodeIndex;
pub use lloyd::{EmptyNodePolicy, Lloyd, RoundReport, Tessellation, relax};
