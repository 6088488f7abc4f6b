/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::id_types::{GraphId, NodeId};
use std::fmt;

/// One input edge of one graph of a multi-graph stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimpleEdgeRow {
    pub graph_id: GraphId,
    pub source_id: NodeId,
    pub target_id: NodeId,
}
impl SimpleEdgeRow {
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.source_id.value(), self.target_id.value())
    }
}
impl fmt::Display for SimpleEdgeRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SimpleEdgeRow: {}\t{}\t{}",
            self.graph_id, self.source_id, self.target_id
        )
    }
}
