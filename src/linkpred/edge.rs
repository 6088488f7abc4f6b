/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::id_types::NodeId;
use std::fmt;

/// An unordered pair of node ids, stored in canonical (ascending) order so
/// that `{u, v}` and `{v, u}` hash and compare identically.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct Edge {
    low: NodeId,
    high: NodeId,
}
impl Edge {
    pub fn new<T: Into<NodeId>>(a: T, b: T) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
    pub fn low(&self) -> NodeId {
        self.low
    }
    pub fn high(&self) -> NodeId {
        self.high
    }
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.low.value(), self.high.value())
    }
}
impl From<(i64, i64)> for Edge {
    fn from(pair: (i64, i64)) -> Self {
        Edge::new(pair.0, pair.1)
    }
}
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.low.value(), self.high.value())
    }
}
