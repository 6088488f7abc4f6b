/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::algorithms::connected_components::ConnectedComponents;
use crate::linkpred::edge::Edge;
use crate::linkpred::graph_base::GraphBase;
use crate::linkpred::id_types::NodeId;
use crate::linkpred::link_prediction::edge_splitter::EdgeSplitter;
use crate::linkpred::node::{NodeBase, SimpleNode};
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use std::collections::hash_map::{Keys, Values};

/// Keeps track of a simple undirected graph, composed of nodes without any type
/// information. Symmetric by construction: `v` is in `u`'s neighbor set iff `u`
/// is in `v`'s.
pub struct SimpleUndirectedGraph {
    pub nodes: FxHashMap<NodeId, SimpleNode>,
    // ascending; the fixed node order of every candidate scan
    pub ids: Vec<NodeId>,
}
impl GraphBase for SimpleUndirectedGraph {
    type NodeType = SimpleNode;

    fn get_ids_iter(&self) -> Keys<NodeId, SimpleNode> {
        self.nodes.keys()
    }
    fn get_nodes_iter(&self) -> Values<NodeId, SimpleNode> {
        self.nodes.values()
    }
    fn has_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }
    fn get_node(&self, node_id: NodeId) -> &SimpleNode {
        &self.nodes[&node_id]
    }
    fn count_edges(&self) -> usize {
        let mut num_edges: usize = 0;
        for node in self.nodes.values() {
            num_edges += node.neighbors.len();
        }
        num_edges / 2
    }
    fn count_nodes(&self) -> usize {
        self.nodes.len()
    }
    fn get_ordered_node_ids(&self) -> Vec<NodeId> {
        self.ids.clone()
    }
}
impl SimpleUndirectedGraph {
    /// Renders the graph as `graph_id \t source \t target` rows, one per edge,
    /// in canonical order. Isolated nodes have no row and are not represented.
    pub fn as_input_rows(&self, graph_id: usize) -> String {
        self.get_edges()
            .iter()
            .map(|e| format!("{}\t{}\t{}", graph_id, e.low().value(), e.high().value()))
            .join("\n")
    }
    pub fn get_node_degree(&self, id: NodeId) -> usize {
        self.nodes[&id].degree()
    }
    pub fn create_empty() -> Self {
        Self {
            nodes: FxHashMap::default(),
            ids: Vec::new(),
        }
    }

    /// Builds a fresh graph holding every node of `self` and every edge not in
    /// `removed`. `self` is left untouched.
    pub fn copy_without_edges(&self, removed: &FxHashSet<Edge>) -> Self {
        let mut nodes: FxHashMap<NodeId, SimpleNode> = FxHashMap::default();
        for (id, node) in &self.nodes {
            let neighbors: FxHashSet<NodeId> = node
                .neighbors
                .iter()
                .filter(|n| !removed.contains(&Edge::new(*id, **n)))
                .cloned()
                .collect();
            nodes.insert(*id, node.with_neighbors(neighbors));
        }
        Self {
            nodes,
            ids: self.ids.clone(),
        }
    }

    /// Builds the subgraph induced on `node_ids`.
    pub fn get_induced_subgraph(&self, node_ids: &[NodeId]) -> Self {
        let keep: FxHashSet<NodeId> = node_ids.iter().cloned().collect();
        let mut nodes: FxHashMap<NodeId, SimpleNode> = FxHashMap::default();
        for id in node_ids {
            let node = self.get_node(*id);
            let neighbors: FxHashSet<NodeId> = node
                .neighbors
                .iter()
                .filter(|n| keep.contains(n))
                .cloned()
                .collect();
            nodes.insert(*id, node.with_neighbors(neighbors));
        }
        let mut ids: Vec<NodeId> = nodes.keys().cloned().collect();
        ids.sort();
        Self { nodes, ids }
    }
}

impl ConnectedComponents for SimpleUndirectedGraph {}
impl EdgeSplitter for SimpleUndirectedGraph {
    fn without_edges(&self, removed: &FxHashSet<Edge>) -> Self {
        self.copy_without_edges(removed)
    }
}
