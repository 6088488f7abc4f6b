/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::edge::Edge;
use crate::linkpred::id_types::NodeId;
use crate::linkpred::node::NodeBase;
use std::collections::hash_map::{Keys, Values};

/// General-purpose trait which indicates the minimum amount of shared context
/// required between graph objects consumed by the link prediction pipeline.
/// A GraphBase is built by a graph builder and is never mutated afterwards.
pub trait GraphBase
where
    Self: Sized,
{
    type NodeType: NodeBase;

    fn get_ids_iter(&self) -> Keys<NodeId, Self::NodeType>;
    fn get_nodes_iter(&self) -> Values<NodeId, Self::NodeType>;
    fn has_node(&self, node_id: NodeId) -> bool;
    fn get_node(&self, node_id: NodeId) -> &Self::NodeType;
    fn count_edges(&self) -> usize;
    fn count_nodes(&self) -> usize;

    fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.has_node(source) && self.get_node(source).is_neighbor(target)
    }

    /// The fixed node order every candidate scan enumerates over.
    fn get_ordered_node_ids(&self) -> Vec<NodeId> {
        let mut node_ids: Vec<NodeId> = self.get_ids_iter().cloned().collect();
        node_ids.sort();
        node_ids
    }

    /// All edges, canonicalized and in ascending order.
    fn get_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = Vec::with_capacity(self.count_edges());
        for node in self.get_nodes_iter() {
            let id = node.get_id();
            for neighbor_id in node.get_neighbors() {
                if id < *neighbor_id {
                    edges.push(Edge::new(id, *neighbor_id));
                }
            }
        }
        edges.sort();
        edges
    }
}
