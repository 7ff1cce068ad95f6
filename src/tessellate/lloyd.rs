//! Lloyd relaxation toward a weighted centroidal Voronoi tessellation.
//!
//! # Algorithm Outline
//!
//! Each round:
//!
//! 1. Snapshot the current node positions.
//! 2. Rebuild the nearest-node index from the current positions.
//! 3. Assign every point to its nearest node.
//! 4. Accumulate, per node: population, Σw, Σw·x, Σw·y.
//! 5. Move each node to its weighted centroid (Σw·x / Σw, Σw·y / Σw). A
//!    node that accumulated zero weight is degenerate and handled by the
//!    configured [`EmptyNodePolicy`] instead.
//! 6. Sum the squared distance every node moved. Zero displacement means
//!    the tessellation is a fixed point and the run has converged; once the
//!    round counter exceeds the budget the run stops with `converged =
//!    false` and the current state is returned as-is.
//!
//! Nodes take the full step to the centroid every round; there is no
//! damping or relaxation factor. The node and point counts never change
//! during a run.
//!
//! # Degenerate nodes
//!
//! A node can end a round owning no points (or only zero-weight points).
//! The reference behavior, kept as the default, snaps such a node to the
//! origin so callers can catch empty bins afterwards. That sentinel can
//! inject a large displacement and let the node jump back into the cloud;
//! [`EmptyNodePolicy::Freeze`] leaves the node in place instead.
//!
//! # References
//!
//! Lloyd, S. (1982). "Least squares quantization in PCM." IEEE Transactions
//! on Information Theory 28(2).
//!
//! Cappellari, M., Copin, Y. (2003). "Adaptive spatial binning of
//! integral-field spectroscopic data using Voronoi tessellations." MNRAS 342.

use log::debug;

use super::index::NodeIndex;
use crate::error::{Error, Result};

/// What to do with a node that accumulated zero weight in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyNodePolicy {
    /// Snap the node to the origin (0, 0). Reference-compatible default.
    #[default]
    SnapToOrigin,
    /// Leave the node at its previous position.
    Freeze,
}

/// Per-round progress report passed to the observer of
/// [`Lloyd::tessellate_with`] and mirrored to `log::debug!`.
#[derive(Debug, Clone, Copy)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u64,
    /// Total squared displacement of all nodes this round.
    pub displacement: f64,
    /// Number of nodes that accumulated zero weight this round.
    pub empty_nodes: usize,
}

/// Result of a relaxation run.
#[derive(Debug, Clone)]
pub struct Tessellation {
    /// Final node positions.
    pub nodes: Vec<[f64; 2]>,
    /// Final point-to-node assignment, one node index per input point.
    pub assignment: Vec<usize>,
    /// Whether the run reached exactly-zero displacement within budget.
    pub converged: bool,
    /// Number of rounds executed (at most `max_iters + 1`).
    pub rounds: u64,
    /// Number of points assigned to each node in the final round.
    pub populations: Vec<usize>,
    /// Weight accumulated by each node in the final round.
    pub node_weights: Vec<f64>,
}

impl Tessellation {
    /// Partition an arbitrary point set onto the final tessellation.
    ///
    /// Uses the same exact nearest-node index as the relaxation itself, so
    /// the original input points map back to [`Tessellation::assignment`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] if any query coordinate is NaN or
    /// infinite.
    pub fn partition(&self, points: &[[f64; 2]]) -> Result<Vec<usize>> {
        for (i, p) in points.iter().enumerate() {
            if !(p[0].is_finite() && p[1].is_finite()) {
                return Err(Error::NonFinite {
                    what: "point coordinate",
                    index: i,
                });
            }
        }
        let index = NodeIndex::build(&self.nodes)?;
        let mut out = vec![0usize; points.len()];
        index.assign(points, &mut out);
        Ok(out)
    }
}

/// Running sums for one node within one round.
#[derive(Debug, Clone, Copy, Default)]
struct NodeAccumulator {
    population: usize,
    weight: f64,
    weighted_x: f64,
    weighted_y: f64,
}

/// Lloyd relaxation of generator nodes over a weighted 2D point set.
#[derive(Debug, Clone)]
pub struct Lloyd {
    max_iters: u64,
    empty_node_policy: EmptyNodePolicy,
}

impl Lloyd {
    /// Create a relaxer with the given iteration budget.
    ///
    /// The budget caps the number of rounds at `max_iters + 1`; exhausting
    /// it is reported through [`Tessellation::converged`], not as an error.
    pub fn new(max_iters: u64) -> Self {
        Self {
            max_iters,
            empty_node_policy: EmptyNodePolicy::default(),
        }
    }

    /// Set the policy applied to nodes that accumulate zero weight.
    pub fn with_empty_node_policy(mut self, policy: EmptyNodePolicy) -> Self {
        self.empty_node_policy = policy;
        self
    }

    /// Relax `seeds` toward the centroidal Voronoi tessellation of the
    /// weighted point set.
    ///
    /// # Errors
    ///
    /// Fails before the first round on empty inputs, a points/weights
    /// length mismatch, or any non-finite coordinate or weight.
    pub fn tessellate(
        &self,
        points: &[[f64; 2]],
        weights: &[f64],
        seeds: &[[f64; 2]],
    ) -> Result<Tessellation> {
        self.tessellate_with(points, weights, seeds, |_| {})
    }

    /// Like [`Lloyd::tessellate`], invoking `on_round` with a
    /// [`RoundReport`] after every completed round.
    pub fn tessellate_with<F>(
        &self,
        points: &[[f64; 2]],
        weights: &[f64],
        seeds: &[[f64; 2]],
        mut on_round: F,
    ) -> Result<Tessellation>
    where
        F: FnMut(&RoundReport),
    {
        validate(points, weights, seeds)?;

        let mut nodes = seeds.to_vec();
        let mut assignment = vec![0usize; points.len()];
        // Scratch accumulators, zeroed and refilled every round.
        let mut acc = vec![NodeAccumulator::default(); seeds.len()];
        let mut rounds: u64 = 0;

        let converged = loop {
            rounds += 1;

            let index = NodeIndex::build(&nodes)?;
            index.assign(points, &mut assignment);

            acc.fill(NodeAccumulator::default());
            for ((p, &w), &node) in points.iter().zip(weights).zip(&assignment) {
                let a = &mut acc[node];
                a.population += 1;
                a.weight += w;
                a.weighted_x += w * p[0];
                a.weighted_y += w * p[1];
            }

            let mut displacement = 0.0;
            let mut empty_nodes = 0;
            for (node, a) in nodes.iter_mut().zip(&acc) {
                let old = *node;
                if a.weight > 0.0 {
                    *node = [a.weighted_x / a.weight, a.weighted_y / a.weight];
                } else {
                    empty_nodes += 1;
                    match self.empty_node_policy {
                        EmptyNodePolicy::SnapToOrigin => *node = [0.0, 0.0],
                        EmptyNodePolicy::Freeze => {}
                    }
                }
                let dx = node[0] - old[0];
                let dy = node[1] - old[1];
                displacement += dx * dx + dy * dy;
            }

            debug!("cvt round {rounds}: displacement {displacement:.6e}, {empty_nodes} empty nodes");
            on_round(&RoundReport {
                round: rounds,
                displacement,
                empty_nodes,
            });

            if displacement == 0.0 {
                break true;
            }
            if rounds > self.max_iters {
                break false;
            }
        };

        debug!("cvt complete after {rounds} rounds (converged: {converged})");

        Ok(Tessellation {
            nodes,
            assignment,
            converged,
            rounds,
            populations: acc.iter().map(|a| a.population).collect(),
            node_weights: acc.iter().map(|a| a.weight).collect(),
        })
    }
}

/// Relax `initial_nodes` toward the centroidal Voronoi tessellation of the
/// weighted point set, with the default empty-node policy.
///
/// Convenience wrapper over [`Lloyd`].
///
/// # Errors
///
/// See [`Lloyd::tessellate`].
pub fn relax(
    points: &[[f64; 2]],
    weights: &[f64],
    initial_nodes: &[[f64; 2]],
    max_iters: u64,
) -> Result<Tessellation> {
    Lloyd::new(max_iters).tessellate(points, weights, initial_nodes)
}

fn validate(points: &[[f64; 2]], weights: &[f64], seeds: &[[f64; 2]]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    if seeds.is_empty() {
        return Err(Error::NoNodes);
    }
    if points.len() != weights.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            weights: weights.len(),
        });
    }
    for (i, p) in points.iter().enumerate() {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return Err(Error::NonFinite {
                what: "point coordinate",
                index: i,
            });
        }
    }
    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() {
            return Err(Error::NonFinite {
                what: "weight",
                index: i,
            });
        }
    }
    for (i, s) in seeds.iter().enumerate() {
        if !(s[0].is_finite() && s[1].is_finite()) {
            return Err(Error::NonFinite {
                what: "node coordinate",
                index: i,
            });
        }
    }
    Ok(())
}
