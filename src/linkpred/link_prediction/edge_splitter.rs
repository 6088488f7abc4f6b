/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::edge::Edge;
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::graph_base::GraphBase;
use fxhash::FxHashSet;
use rand::seq::index;
use rand::Rng;

/// Result of hiding a fraction of a graph's edges: the graph the scorers get
/// to see, and the hidden edges they are evaluated against.
pub struct EdgeSplit<G> {
    pub training_graph: G,
    pub removed_edges: Vec<Edge>,
}

pub trait EdgeSplitter: GraphBase {
    /// A new graph with all of `self`'s nodes and every edge not in `removed`.
    fn without_edges(&self, removed: &FxHashSet<Edge>) -> Self;

    /// Removes `floor(|E| * fraction)` edges chosen uniformly at random without
    /// replacement. Every node is kept, so the training graph may end up
    /// disconnected. Edges are sampled from their canonical ordering, so the
    /// removed set only depends on the graph and the state of `rng`.
    fn split_edges<R: Rng + ?Sized>(&self, fraction: f64, rng: &mut R) -> LPResult<EdgeSplit<Self>> {
        if !(0.0..1.0).contains(&fraction) {
            return Err(LPError::invalid_input(format!(
                "removal fraction must lie in [0, 1), got {}",
                fraction
            )));
        }
        let edges = self.get_edges();
        if edges.is_empty() && fraction > 0.0 {
            return Err(LPError::invalid_input(
                "cannot remove edges from a graph with no edges",
            ));
        }
        let num_remove = (edges.len() as f64 * fraction).floor() as usize;
        log::info!(
            "Removing {:.1}% of edges ({} of {}).",
            fraction * 100.0,
            num_remove,
            edges.len()
        );
        let removed_edges: Vec<Edge> = index::sample(rng, edges.len(), num_remove)
            .into_vec()
            .into_iter()
            .map(|i| edges[i])
            .collect();
        let removed_set: FxHashSet<Edge> = removed_edges.iter().cloned().collect();
        Ok(EdgeSplit {
            training_graph: self.without_edges(&removed_set),
            removed_edges,
        })
    }
}
