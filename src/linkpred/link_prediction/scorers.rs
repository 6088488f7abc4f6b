/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::edge::Edge;
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::graph_base::GraphBase;
use crate::linkpred::id_types::NodeId;
use crate::linkpred::link_prediction::neighborhood::NeighborhoodIndex;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A candidate pair (two distinct, non-adjacent nodes) and its predicted
/// likelihood of being a true edge. Higher is more likely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoredPair {
    pub edge: Edge,
    pub score: f64,
}

/// Closed-form topological link predictor over a fixed training graph.
///
/// Implementors only supply `score_pair`; the candidate scan is shared. Pairs
/// are enumerated as `(i, j)` with `i < j` over the ascending node order and
/// pairs that are already edges are skipped, so every predictor over the same
/// graph emits the same candidates in the same order.
pub trait LinkPredictor: Sync {
    fn get_name(&self) -> &'static str;
    fn get_index(&self) -> &NeighborhoodIndex;
    /// score of the pair at positions `i`, `j` of the index.
    fn score_pair(&self, i: usize, j: usize) -> f64;

    /// Score of an arbitrary pair of nodes, whether or not they are adjacent.
    /// `None` when either node is unknown or both ids are the same.
    fn score(&self, source: NodeId, target: NodeId) -> Option<f64> {
        let index = self.get_index();
        let i = index.get_position(source)?;
        let j = index.get_position(target)?;
        if i == j {
            return None;
        }
        Some(self.score_pair(i, j))
    }

    /// all candidate pairs whose lower position is `i`.
    fn score_row(&self, i: usize) -> Vec<ScoredPair> {
        let index = self.get_index();
        ((i + 1)..index.len())
            .filter(|j| !index.is_adjacent(i, *j))
            .map(|j| ScoredPair {
                edge: Edge::new(index.get_id(i), index.get_id(j)),
                score: self.score_pair(i, j),
            })
            .collect()
    }

    /// Scores every candidate pair of the training graph.
    fn fit(&self) -> Vec<ScoredPair> {
        let n = self.get_index().len();
        log::debug!("{}: scanning candidate pairs over {} nodes", self.get_name(), n);
        (0..n).flat_map(|i| self.score_row(i)).collect()
    }

    /// Same output as `fit`, with rows of the scan spread over the rayon
    /// global pool and concatenated back in order.
    fn fit_parallel(&self) -> Vec<ScoredPair> {
        let n = self.get_index().len();
        log::debug!(
            "{}: scanning candidate pairs over {} nodes on {} threads",
            self.get_name(),
            n,
            rayon::current_num_threads()
        );
        (0..n)
            .into_par_iter()
            .map(|i| self.score_row(i))
            .collect::<Vec<Vec<ScoredPair>>>()
            .concat()
    }
}

/// `|N(u) ∩ N(v)|`
pub struct CommonNeighbors {
    index: NeighborhoodIndex,
}
impl CommonNeighbors {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        Self {
            index: NeighborhoodIndex::new(graph),
        }
    }
}
impl LinkPredictor for CommonNeighbors {
    fn get_name(&self) -> &'static str {
        "common_neighbors"
    }
    fn get_index(&self) -> &NeighborhoodIndex {
        &self.index
    }
    fn score_pair(&self, i: usize, j: usize) -> f64 {
        self.index.count_common_neighbors(i, j) as f64
    }
}

/// `|N(u) ∩ N(v)| / |N(u) ∪ N(v)|`, 0.0 when both nodes are isolated.
pub struct Jaccard {
    index: NeighborhoodIndex,
}
impl Jaccard {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        Self {
            index: NeighborhoodIndex::new(graph),
        }
    }
}
impl LinkPredictor for Jaccard {
    fn get_name(&self) -> &'static str {
        "jaccard"
    }
    fn get_index(&self) -> &NeighborhoodIndex {
        &self.index
    }
    fn score_pair(&self, i: usize, j: usize) -> f64 {
        let num_common = self.index.count_common_neighbors(i, j);
        let union_size = self.index.union_size(i, j, num_common);
        if union_size == 0 {
            return 0.0;
        }
        num_common as f64 / union_size as f64
    }
}

/// Sum of `1 / ln(deg(w))` over common neighbors `w`. Common neighbors of
/// degree 1 contribute nothing.
pub struct AdamicAdar {
    index: NeighborhoodIndex,
    // per-position contribution as a common neighbor
    weights: Vec<f64>,
}
impl AdamicAdar {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        let index = NeighborhoodIndex::new(graph);
        let weights = (0..index.len())
            .map(|w| Self::weight(index.degree(w)))
            .collect();
        Self { index, weights }
    }
    pub fn weight(degree: usize) -> f64 {
        if degree > 1 {
            1.0 / (degree as f64).ln()
        } else {
            0.0
        }
    }
}
impl LinkPredictor for AdamicAdar {
    fn get_name(&self) -> &'static str {
        "adamic_adar"
    }
    fn get_index(&self) -> &NeighborhoodIndex {
        &self.index
    }
    fn score_pair(&self, i: usize, j: usize) -> f64 {
        self.index
            .common_neighbors(i, j)
            .map(|w| self.weights[w])
            .sum()
    }
}

/// The available predictors, selectable by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScorerKind {
    CommonNeighbors,
    Jaccard,
    AdamicAdar,
}
impl ScorerKind {
    pub fn all() -> Vec<ScorerKind> {
        vec![
            ScorerKind::CommonNeighbors,
            ScorerKind::Jaccard,
            ScorerKind::AdamicAdar,
        ]
    }
    pub fn name(&self) -> &'static str {
        match self {
            ScorerKind::CommonNeighbors => "common_neighbors",
            ScorerKind::Jaccard => "jaccard",
            ScorerKind::AdamicAdar => "adamic_adar",
        }
    }
    pub fn build<G: GraphBase>(&self, graph: &G) -> Box<dyn LinkPredictor> {
        match self {
            ScorerKind::CommonNeighbors => Box::new(CommonNeighbors::new(graph)),
            ScorerKind::Jaccard => Box::new(Jaccard::new(graph)),
            ScorerKind::AdamicAdar => Box::new(AdamicAdar::new(graph)),
        }
    }
}
impl FromStr for ScorerKind {
    type Err = LPError;
    fn from_str(s: &str) -> LPResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "common_neighbors" | "cn" => Ok(ScorerKind::CommonNeighbors),
            "jaccard" => Ok(ScorerKind::Jaccard),
            "adamic_adar" | "aa" => Ok(ScorerKind::AdamicAdar),
            other => Err(LPError::invalid_input(format!("unknown scorer: {}", other))),
        }
    }
}
impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
