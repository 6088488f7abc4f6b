/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::graph_base::GraphBase;
use crate::linkpred::id_types::GraphId;
use crate::linkpred::line_processor::LineProcessor;
use crate::linkpred::link_prediction::experiment::{
    run_experiment, ExperimentConfig, ExperimentRecord,
};
use crate::linkpred::row::SimpleEdgeRow;
use crate::linkpred::simple_undirected_graph::SimpleUndirectedGraph;
use crate::linkpred::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
use crate::linkpred::transformer_base::TransformerBase;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs the link prediction benchmark on every graph of an edge stream and
/// emits one `graph_key \t json` line per (fraction, scorer) combination.
pub struct LinkPredictionTransformer {
    batch: Vec<SimpleEdgeRow>,
    line_processor: Arc<LineProcessor>,
    config: ExperimentConfig,
}
impl LinkPredictionTransformer {
    pub fn new(config: ExperimentConfig) -> LPResult<Self> {
        config.validate()?;
        Ok(Self {
            batch: Vec::new(),
            line_processor: Arc::new(LineProcessor::new()),
            config,
        })
    }

    /// Benchmarks one graph. The splitter's RNG is seeded with
    /// `config.seed + graph_index`, so each graph of a stream is reproducible
    /// on its own.
    pub fn benchmark_graph(
        graph: &SimpleUndirectedGraph,
        config: &ExperimentConfig,
        graph_index: i64,
    ) -> LPResult<Vec<ExperimentRecord>> {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(graph_index as u64));
        if config.largest_cc {
            let lcc = graph.get_largest_connected_component();
            log::info!(
                "Restricted to largest connected component: {} nodes, {} edges.",
                lcc.count_nodes(),
                lcc.count_edges()
            );
            return run_experiment(&lcc, config, &mut rng);
        }
        run_experiment(graph, config, &mut rng)
    }
}
impl TransformerBase for LinkPredictionTransformer {
    fn get_line_processor(&self) -> Arc<LineProcessor> {
        self.line_processor.clone()
    }
    fn process_row(&mut self, row: SimpleEdgeRow) -> LPResult<()> {
        self.batch.push(row);
        Ok(())
    }
    fn reset(&mut self) -> LPResult<()> {
        self.batch.clear();
        Ok(())
    }
    fn process_batch(&self, graph_id: GraphId, output: &Sender<String>) -> LPResult<()> {
        let tuples: Vec<(i64, i64)> = self.batch.iter().map(|x| x.as_tuple()).collect();
        let graph = SimpleUndirectedGraphBuilder::from_vector(&tuples);
        let original_id = self
            .line_processor
            .get_original_id(graph_id.value() as usize)?;
        log::info!(
            "Processing graph {}: {} nodes, {} edges.",
            original_id,
            graph.count_nodes(),
            graph.count_edges()
        );
        let records = Self::benchmark_graph(&graph, &self.config, graph_id.value())?;
        for record in records {
            let line: String = format!("{}\t{}", original_id, record.to_json());
            output
                .send(line)
                .map_err(|_| LPError::new("Output writer hung up."))?;
        }
        Ok(())
    }
}
