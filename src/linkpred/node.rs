/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::cmp::{Eq, PartialEq};
use std::hash::{Hash, Hasher};

use crate::linkpred::id_types::NodeId;
use fxhash::{FxHashMap, FxHashSet};

pub trait NodeBase
where
    Self: Sized,
{
    fn get_id(&self) -> NodeId;
    fn get_neighbors(&self) -> &FxHashSet<NodeId>;
    fn degree(&self) -> usize;
    fn is_neighbor(&self, id: NodeId) -> bool;
}

/// A node in a simple undirected graph. Neighbors are kept in a hash set so
/// that edge-membership tests are constant time. Attributes come from the
/// loader and are carried along untouched; no scorer reads them.
pub struct SimpleNode {
    pub node_id: NodeId,
    pub neighbors: FxHashSet<NodeId>,
    pub attributes: FxHashMap<String, String>,
}
impl Hash for SimpleNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id.hash(state);
    }
}
impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}
impl Eq for SimpleNode {}
impl NodeBase for SimpleNode {
    fn get_id(&self) -> NodeId {
        self.node_id
    }
    fn get_neighbors(&self) -> &FxHashSet<NodeId> {
        &self.neighbors
    }
    /// degree is the neighbor count (the graph is simple)
    fn degree(&self) -> usize {
        self.neighbors.len()
    }
    fn is_neighbor(&self, id: NodeId) -> bool {
        self.neighbors.contains(&id)
    }
}
impl SimpleNode {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            neighbors: FxHashSet::default(),
            attributes: FxHashMap::default(),
        }
    }
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|v| v.as_str())
    }
    /// Same node with a different neighbor set.
    pub fn with_neighbors(&self, neighbors: FxHashSet<NodeId>) -> Self {
        Self {
            node_id: self.node_id,
            neighbors,
            attributes: self.attributes.clone(),
        }
    }
}
