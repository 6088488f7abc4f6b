/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::graph_base::GraphBase;
use crate::linkpred::id_types::NodeId;
use crate::linkpred::node::NodeBase;
use crate::linkpred::simple_undirected_graph::SimpleUndirectedGraph;
use fxhash::FxHashMap;
use std::collections::BTreeSet;

type OrderedNodeSet = BTreeSet<NodeId>;

pub trait ConnectedComponents: GraphBase {
    // returns a map of the form node_id => component_id, plus the number of
    // components. Component ids follow the order of each component's smallest
    // node id.
    fn get_connected_components_membership(&self) -> (FxHashMap<NodeId, usize>, usize) {
        let mut components: FxHashMap<NodeId, usize> = FxHashMap::default();
        let mut queue: OrderedNodeSet = self.get_ids_iter().cloned().collect();
        let mut idx = 0;
        while let Some(id) = queue.pop_first() {
            components.insert(id, idx);
            let mut frontier: Vec<NodeId> = vec![id];
            while let Some(nid) = frontier.pop() {
                for neighbor_id in self.get_node(nid).get_neighbors() {
                    if queue.remove(neighbor_id) {
                        components.insert(*neighbor_id, idx);
                        frontier.push(*neighbor_id);
                    }
                }
            }
            idx += 1;
        }
        (components, idx)
    }
    fn get_connected_components(&self) -> Vec<Vec<NodeId>> {
        let (components, n) = self.get_connected_components_membership();
        let mut v: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for (nid, component_idx) in components {
            v[component_idx].push(nid);
        }
        for component in v.iter_mut() {
            component.sort();
        }
        v
    }
}

impl SimpleUndirectedGraph {
    /// The subgraph induced on the largest connected component. When several
    /// components share the maximum size, the one with the smallest node id wins.
    pub fn get_largest_connected_component(&self) -> SimpleUndirectedGraph {
        let components = self.get_connected_components();
        let mut largest: Option<&Vec<NodeId>> = None;
        for component in &components {
            if largest.map_or(true, |l| component.len() > l.len()) {
                largest = Some(component);
            }
        }
        match largest {
            Some(component) => {
                log::debug!(
                    "Largest connected component has {} of {} nodes ({} components)",
                    component.len(),
                    self.count_nodes(),
                    components.len()
                );
                self.get_induced_subgraph(component)
            }
            None => SimpleUndirectedGraph::create_empty(),
        }
    }
}
