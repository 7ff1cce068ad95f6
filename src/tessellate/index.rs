//! Exact nearest-node lookups over a fixed set of generator positions.
//!
//! The index is rebuilt from scratch every relaxation round because node
//! positions change every round; there is no incremental update path.

use kiddo::{KdTree, SquaredEuclidean};

use crate::error::{Error, Result};

/// Nearest-node index over 2D generator positions, backed by a k-d tree.
///
/// Queries are exact (no approximate nearest neighbor). Ties at the winning
/// distance break to the lowest node index, so a batch of queries against
/// the same index is fully deterministic.
pub struct NodeIndex {
    tree: KdTree<f64, 2>,
}

impl NodeIndex {
    /// Build an index from the current node positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNodes`] for an empty node set and
    /// [`Error::NonFinite`] if any coordinate is NaN or infinite.
    pub fn build(nodes: &[[f64; 2]]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::NoNodes);
        }
        for (i, n) in nodes.iter().enumerate() {
            if !(n[0].is_finite() && n[1].is_finite()) {
                return Err(Error::NonFinite {
                    what: "node coordinate",
                    index: i,
                });
            }
        }

        let mut tree: KdTree<f64, 2> = KdTree::with_capacity(nodes.len());
        for (i, n) in nodes.iter().enumerate() {
            tree.add(n, i as u64);
        }
        Ok(Self { tree })
    }

    /// Index of the node nearest to `point` (squared Euclidean distance).
    pub fn nearest(&self, point: [f64; 2]) -> usize {
        let hit = self.tree.nearest_one::<SquaredEuclidean>(&point);

        // Ties sit exactly at the winning distance; widen the radius a hair
        // so a boundary comparison inside the tree cannot exclude them, then
        // keep only true ties and take the lowest index.
        let radius = hit.distance + hit.distance * 1e-9 + f64::MIN_POSITIVE;
        self.tree
            .within_unsorted::<SquaredEuclidean>(&point, radius)
            .into_iter()
            .filter(|n| n.distance <= hit.distance)
            .map(|n| n.item as usize)
            .min()
            .unwrap_or(hit.item as usize)
    }

    /// Assign every point in `points` to its nearest node, writing node
    /// indices into `out`.
    pub fn assign(&self, points: &[[f64; 2]], out: &mut [usize]) {
        debug_assert_eq!(points.len(), out.len());
        for (slot, &p) in out.iter_mut().zip(points) {
            *slot = self.nearest(p);
        }
    }
}
