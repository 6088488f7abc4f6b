/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::id_types::NodeId;
use crate::linkpred::node::SimpleNode;
use crate::linkpred::simple_undirected_graph::SimpleUndirectedGraph;
use fxhash::{FxHashMap, FxHashSet};
use rand::Rng;
use std::collections::BTreeMap;

pub struct SimpleUndirectedGraphBuilder {}

impl SimpleUndirectedGraphBuilder {
    // builds a graph from a vector of IDs. Repeated edges are ignored.
    // Edges only need to be provided once (this being an undirected graph).
    #[allow(clippy::ptr_arg)]
    pub fn from_vector(data: &Vec<(i64, i64)>) -> SimpleUndirectedGraph {
        Self::from_nodes_and_edges(&[], data)
    }

    // same as from_vector, but every id in `node_ids` is guaranteed a node,
    // so isolated nodes survive.
    pub fn from_nodes_and_edges(node_ids: &[i64], edges: &[(i64, i64)]) -> SimpleUndirectedGraph {
        Self::from_attributed_nodes_and_edges(&FxHashMap::default(), node_ids, edges)
    }

    // same as from_nodes_and_edges, with per-node attributes as provided by a
    // graph loader. Attributed ids always get a node.
    pub fn from_attributed_nodes_and_edges(
        attributes: &FxHashMap<i64, FxHashMap<String, String>>,
        node_ids: &[i64],
        edges: &[(i64, i64)],
    ) -> SimpleUndirectedGraph {
        let mut ids: BTreeMap<NodeId, FxHashSet<NodeId>> = BTreeMap::new();
        for id in node_ids.iter().chain(attributes.keys()) {
            ids.entry(NodeId::from(*id)).or_insert_with(FxHashSet::default);
        }
        for (id1, id2) in edges {
            if id1 == id2 {
                log::warn!("Dropping self-loop on node {}", id1);
                ids.entry(NodeId::from(*id1)).or_insert_with(FxHashSet::default);
                continue;
            }
            ids.entry(NodeId::from(*id1))
                .or_insert_with(FxHashSet::default)
                .insert(NodeId::from(*id2));
            ids.entry(NodeId::from(*id2))
                .or_insert_with(FxHashSet::default)
                .insert(NodeId::from(*id1));
        }
        let ordered_ids: Vec<NodeId> = ids.keys().cloned().collect();
        let mut nodes: FxHashMap<NodeId, SimpleNode> = FxHashMap::default();
        for (id, neighbors) in ids.into_iter() {
            nodes.insert(
                id,
                SimpleNode {
                    node_id: id,
                    neighbors,
                    attributes: attributes.get(&id.value()).cloned().unwrap_or_default(),
                },
            );
        }
        SimpleUndirectedGraph {
            nodes,
            ids: ordered_ids,
        }
    }

    // Build a graph with n vertices with every possible edge.
    pub fn get_complete_graph(n: u64) -> SimpleUndirectedGraph {
        let mut v = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                v.push((i as i64, j as i64));
            }
        }
        Self::from_vector(&v)
    }

    // Build a graph with a sequence of n vertices with an edge between
    // each pair of successive vertices.
    pub fn get_path_graph(n: u64) -> SimpleUndirectedGraph {
        let v: Vec<(i64, i64)> = (1..n).map(|i| ((i - 1) as i64, i as i64)).collect();
        Self::from_nodes_and_edges(&(0..n as i64).collect::<Vec<i64>>(), &v)
    }

    // Build a graph with a sequence of n vertices with an edge between
    // each pair of successive vertices, plus an edge between the first and
    // last vertices.
    pub fn get_cycle_graph(n: u64) -> SimpleUndirectedGraph {
        let v: Vec<(i64, i64)> = (0..n).map(|i| (i as i64, ((i + 1) % n) as i64)).collect();
        Self::from_nodes_and_edges(&(0..n as i64).collect::<Vec<i64>>(), &v)
    }

    // Node 0 connected to each of the n - 1 leaves.
    pub fn get_star_graph(n: u64) -> SimpleUndirectedGraph {
        let v: Vec<(i64, i64)> = (1..n).map(|i| (0, i as i64)).collect();
        Self::from_nodes_and_edges(&(0..n as i64).collect::<Vec<i64>>(), &v)
    }

    // Builds an Erdos-Renyi graph on n vertices, each possible edge present
    // independently with probability p. Randomness comes from the caller so
    // that generated graphs are reproducible.
    pub fn get_er_graph<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> SimpleUndirectedGraph {
        let mut v = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                if rng.gen::<f64>() < p {
                    v.push((i as i64, j as i64));
                }
            }
        }
        Self::from_nodes_and_edges(&(0..n as i64).collect::<Vec<i64>>(), &v)
    }
}
