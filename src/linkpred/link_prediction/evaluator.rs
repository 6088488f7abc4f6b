/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::edge::Edge;
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::link_prediction::scorers::ScoredPair;
use fxhash::FxHashSet;
use ordered_float::OrderedFloat;
use serde_json::{json, Value};
use std::cmp::Reverse;

/// Quality of the top-k predictions against the hidden edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    pub k: usize,
    pub hits: usize,
    pub precision: f64,
    pub recall: f64,
}
impl EvaluationResult {
    pub fn to_json(&self) -> Value {
        json!({
            "k": self.k,
            "hits": self.hits,
            "precision": self.precision,
            "recall": self.recall,
        })
    }
}

/// Candidate pairs sorted by descending score. The sort is stable, so pairs
/// with equal scores keep the order in which they were scored.
pub fn rank(scored_pairs: &[ScoredPair]) -> Vec<Edge> {
    let mut ranking: Vec<&ScoredPair> = scored_pairs.iter().collect();
    ranking.sort_by_key(|pair| Reverse(OrderedFloat(pair.score)));
    ranking.into_iter().map(|pair| pair.edge).collect()
}

/// Computes hits, precision@k and recall@k for every `k` in `k_list`, in the
/// given order.
///
/// Precision always divides by the requested `k`, even when fewer than `k`
/// candidates were scored. Recall is 0.0 when nothing was removed.
pub fn evaluate(
    scored_pairs: &[ScoredPair],
    removed_edges: &[Edge],
    k_list: &[usize],
) -> LPResult<Vec<EvaluationResult>> {
    if let Some(k) = k_list.iter().find(|k| **k == 0) {
        return Err(LPError::invalid_input(format!(
            "cutoffs must be positive, got k = {}",
            k
        )));
    }
    // Edge is canonical by construction, so set membership matches {u,v} to {v,u}.
    let removed_set: FxHashSet<Edge> = removed_edges.iter().cloned().collect();
    let ranking = rank(scored_pairs);

    let mut results: Vec<EvaluationResult> = Vec::with_capacity(k_list.len());
    for &k in k_list {
        let top_k: FxHashSet<Edge> = ranking.iter().take(k).cloned().collect();
        let hits = top_k.intersection(&removed_set).count();
        let precision = hits as f64 / k as f64;
        let recall = if removed_set.is_empty() {
            0.0
        } else {
            hits as f64 / removed_set.len() as f64
        };
        log::debug!(
            "k={} | hits={} | precision={:.2} | recall={:.2}",
            k,
            hits,
            precision,
            recall
        );
        results.push(EvaluationResult {
            k,
            hits,
            precision,
            recall,
        });
    }
    Ok(results)
}
