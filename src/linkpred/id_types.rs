/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::fmt;

/// Uniquely identifies a node, relative to an existing graph.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct NodeId {
    id: i64,
}
impl NodeId {
    pub fn value(&self) -> i64 {
        self.id
    }
}
impl<T> From<T> for NodeId
where
    T: Into<i64>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node:{}", self.id)
    }
}

/// Used to refer to distinct graphs in a multi-graph input stream. Rows
/// sharing a `GraphId` are assembled into one graph and benchmarked together.
#[derive(Hash, Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphId {
    id: i64,
}
impl GraphId {
    pub fn value(&self) -> i64 {
        self.id
    }
}
impl<T> From<T> for GraphId
where
    T: Into<i64>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Graph:{}", self.id)
    }
}
