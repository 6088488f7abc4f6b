/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::graph_base::GraphBase;
use crate::linkpred::id_types::NodeId;
use crate::linkpred::node::NodeBase;
use fxhash::{FxHashMap, FxHashSet};

/// Dense, read-only view of a graph's neighborhoods, built once per scan.
/// Nodes are addressed by their position in `GraphBase::get_ordered_node_ids`.
pub struct NeighborhoodIndex {
    ids: Vec<NodeId>,
    // ascending positions
    neighbors: Vec<Vec<usize>>,
    neighbor_sets: Vec<FxHashSet<usize>>,
}

impl NeighborhoodIndex {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        let ids = graph.get_ordered_node_ids();
        let positions: FxHashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(pos, id)| (*id, pos)).collect();
        let mut neighbors: Vec<Vec<usize>> = Vec::with_capacity(ids.len());
        for id in &ids {
            let mut node_neighbors: Vec<usize> = graph
                .get_node(*id)
                .get_neighbors()
                .iter()
                .map(|n| positions[n])
                .collect();
            node_neighbors.sort_unstable();
            neighbors.push(node_neighbors);
        }
        let neighbor_sets = neighbors
            .iter()
            .map(|n| n.iter().cloned().collect::<FxHashSet<usize>>())
            .collect();
        Self {
            ids,
            neighbors,
            neighbor_sets,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
    pub fn get_id(&self, pos: usize) -> NodeId {
        self.ids[pos]
    }
    pub fn get_position(&self, id: NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }
    pub fn degree(&self, pos: usize) -> usize {
        self.neighbors[pos].len()
    }
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.neighbor_sets[i].contains(&j)
    }

    /// Common neighbors of `i` and `j`, in ascending position order whichever
    /// argument comes first.
    pub fn common_neighbors(&self, i: usize, j: usize) -> impl Iterator<Item = usize> + '_ {
        let (smaller, larger) = if self.degree(i) <= self.degree(j) {
            (i, j)
        } else {
            (j, i)
        };
        let other = &self.neighbor_sets[larger];
        self.neighbors[smaller]
            .iter()
            .cloned()
            .filter(move |w| other.contains(w))
    }

    pub fn count_common_neighbors(&self, i: usize, j: usize) -> usize {
        self.common_neighbors(i, j).count()
    }

    /// |N(i) ∪ N(j)|, from the degrees and the intersection size.
    pub fn union_size(&self, i: usize, j: usize, num_common: usize) -> usize {
        self.degree(i) + self.degree(j) - num_common
    }
}
