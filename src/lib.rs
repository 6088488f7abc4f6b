/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate rand;
extern crate thiserror;

pub mod linkpred;

pub use linkpred::edge::Edge;
pub use linkpred::error::{LPError, LPResult};
pub use linkpred::graph_base::GraphBase;
pub use linkpred::id_types::{GraphId, NodeId};
pub use linkpred::input::Input;
pub use linkpred::line_processor::LineProcessor;
pub use linkpred::link_prediction::edge_splitter::{EdgeSplit, EdgeSplitter};
pub use linkpred::link_prediction::evaluator::{evaluate, EvaluationResult};
pub use linkpred::link_prediction::experiment::{run_experiment, ExperimentConfig, ExperimentRecord};
pub use linkpred::link_prediction::scorers::{
    AdamicAdar, CommonNeighbors, Jaccard, LinkPredictor, ScoredPair, ScorerKind,
};
pub use linkpred::link_prediction_transformer::LinkPredictionTransformer;
pub use linkpred::output::Output;
pub use linkpred::row::SimpleEdgeRow;
pub use linkpred::simple_undirected_graph::SimpleUndirectedGraph;
pub use linkpred::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
pub use linkpred::transformer_base::TransformerBase;
