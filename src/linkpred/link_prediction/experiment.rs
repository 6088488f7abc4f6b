/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::link_prediction::edge_splitter::EdgeSplitter;
use crate::linkpred::link_prediction::evaluator::{evaluate, EvaluationResult};
use crate::linkpred::link_prediction::scorers::{ScoredPair, ScorerKind};
use rand::Rng;
use serde_json::{json, Value};

/// Parameters of a benchmark run over one or more graphs.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// fractions of edges to hide, one split per fraction.
    pub fractions: Vec<f64>,
    /// cutoffs for precision@k / recall@k.
    pub k_list: Vec<usize>,
    pub scorers: Vec<ScorerKind>,
    /// seeds the edge splitter; graph `i` of an input stream uses `seed + i`.
    pub seed: u64,
    /// scan candidate pairs on the rayon pool.
    pub parallel: bool,
    /// restrict each input graph to its largest connected component first.
    pub largest_cc: bool,
}
impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            fractions: vec![0.05, 0.1],
            k_list: vec![50, 100, 200, 400],
            scorers: ScorerKind::all(),
            seed: 0,
            parallel: false,
            largest_cc: false,
        }
    }
}
impl ExperimentConfig {
    /// Rejects configurations that would only fail halfway through a run.
    pub fn validate(&self) -> LPResult<()> {
        if let Some(f) = self.fractions.iter().find(|f| !(0.0..1.0).contains(*f)) {
            return Err(LPError::invalid_input(format!(
                "removal fraction must lie in [0, 1), got {}",
                f
            )));
        }
        if self.k_list.iter().any(|k| *k == 0) {
            return Err(LPError::invalid_input("cutoffs must be positive"));
        }
        if self.scorers.is_empty() {
            return Err(LPError::invalid_input("at least one scorer is required"));
        }
        Ok(())
    }
}

/// Outcome of one (fraction, scorer) combination on one graph.
#[derive(Clone, Debug)]
pub struct ExperimentRecord {
    pub fraction: f64,
    pub scorer: ScorerKind,
    pub num_removed: usize,
    pub num_candidates: usize,
    pub results: Vec<EvaluationResult>,
}
impl ExperimentRecord {
    pub fn to_json(&self) -> Value {
        json!({
            "fraction": self.fraction,
            "scorer": self.scorer.name(),
            "num_removed": self.num_removed,
            "num_candidates": self.num_candidates,
            "results": self.results.iter().map(|r| r.to_json()).collect::<Vec<Value>>(),
        })
    }
}

/// Splits `graph` once per fraction, runs every configured scorer on that
/// split and evaluates the rankings against the removed edges.
pub fn run_experiment<G: EdgeSplitter, R: Rng + ?Sized>(
    graph: &G,
    config: &ExperimentConfig,
    rng: &mut R,
) -> LPResult<Vec<ExperimentRecord>> {
    config.validate()?;
    let mut records: Vec<ExperimentRecord> = Vec::new();
    for &fraction in &config.fractions {
        let split = graph.split_edges(fraction, rng)?;
        log::info!(
            "Removed {} edges (fraction = {}).",
            split.removed_edges.len(),
            fraction
        );
        for scorer in &config.scorers {
            log::info!("Running model: {}", scorer);
            let predictor = scorer.build(&split.training_graph);
            let predictions: Vec<ScoredPair> = if config.parallel {
                predictor.fit_parallel()
            } else {
                predictor.fit()
            };
            let results = evaluate(&predictions, &split.removed_edges, &config.k_list)?;
            for result in &results {
                log::info!(
                    "  {} | k={} | hits={} | precision={:.2} | recall={:.2}",
                    scorer,
                    result.k,
                    result.hits,
                    result.precision,
                    result.recall
                );
            }
            records.push(ExperimentRecord {
                fraction,
                scorer: *scorer,
                num_removed: split.removed_edges.len(),
                num_candidates: predictions.len(),
                results,
            });
        }
    }
    Ok(records)
}
