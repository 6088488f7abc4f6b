/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_linkpred;
use lib_linkpred::linkpred::error::LPError;
use lib_linkpred::linkpred::graph_base::GraphBase;
use lib_linkpred::linkpred::input::Input;
use lib_linkpred::linkpred::link_prediction::experiment::{run_experiment, ExperimentConfig};
use lib_linkpred::linkpred::link_prediction::scorers::ScorerKind;
use lib_linkpred::linkpred::link_prediction_transformer::LinkPredictionTransformer;
use lib_linkpred::linkpred::output::Output;
use lib_linkpred::linkpred::simple_undirected_graph::SimpleUndirectedGraph;
use lib_linkpred::linkpred::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
use lib_linkpred::linkpred::transformer_base::TransformerBase;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn get_config() -> ExperimentConfig {
    ExperimentConfig {
        fractions: vec![0.2, 0.5],
        k_list: vec![1, 2, 5],
        scorers: ScorerKind::all(),
        seed: 1234,
        parallel: false,
        largest_cc: false,
    }
}

// rebuilt from their edge rows, so that they match what the transformer reads
// (isolated nodes have no row).
fn get_graphs() -> Vec<SimpleUndirectedGraph> {
    let mut rng = StdRng::seed_from_u64(99);
    vec![
        SimpleUndirectedGraphBuilder::get_complete_graph(6),
        SimpleUndirectedGraphBuilder::get_er_graph(20, 0.3, &mut rng),
        SimpleUndirectedGraphBuilder::get_cycle_graph(12),
    ]
    .into_iter()
    .map(|g| {
        let rows: Vec<(i64, i64)> = g.get_edges().iter().map(|e| e.as_tuple()).collect();
        SimpleUndirectedGraphBuilder::from_vector(&rows)
    })
    .collect()
}

fn run_transformer(config: ExperimentConfig, text: &str) -> Result<String, LPError> {
    let mut transformer = LinkPredictionTransformer::new(config)?;
    let bytes = text.as_bytes();
    let input = Input::string(&bytes);
    let mut buffer: Vec<u8> = Vec::new();
    let output = Output::string(&mut buffer);
    transformer.run(input, output)?;
    Ok(String::from_utf8(buffer).unwrap())
}

#[test]
fn test_experiment_records() {
    let graph = SimpleUndirectedGraphBuilder::get_cycle_graph(10);
    let config = get_config();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let records = run_experiment(&graph, &config, &mut rng).unwrap();
    assert_eq!(records.len(), 6);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.fraction, config.fractions[i / 3]);
        assert_eq!(record.scorer, config.scorers[i % 3]);
        assert_eq!(record.results.len(), 3);
        let expected_removed = if i < 3 { 2 } else { 5 };
        assert_eq!(record.num_removed, expected_removed);
        // 45 pairs, minus the edges still present
        assert_eq!(record.num_candidates, 45 - (10 - expected_removed));
        for result in &record.results {
            assert!(result.hits <= result.k);
            assert!(result.recall <= 1.0);
        }
    }
}

#[test]
fn test_experiment_is_reproducible() {
    let mut graph_rng = StdRng::seed_from_u64(4);
    let graph = SimpleUndirectedGraphBuilder::get_er_graph(30, 0.2, &mut graph_rng);
    let mut config = get_config();
    let run = |config: &ExperimentConfig| {
        let mut rng = StdRng::seed_from_u64(config.seed);
        run_experiment(&graph, config, &mut rng)
            .unwrap()
            .iter()
            .map(|r| r.to_json().to_string())
            .collect::<Vec<String>>()
    };
    let sequential = run(&config);
    assert_eq!(sequential, run(&config));
    config.parallel = true;
    assert_eq!(sequential, run(&config));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = get_config();
    config.k_list = vec![0];
    assert!(LinkPredictionTransformer::new(config).is_err());
    let mut config = get_config();
    config.fractions = vec![0.1, 1.0];
    assert!(config.validate().is_err());
    let mut config = get_config();
    config.scorers.clear();
    assert!(config.validate().is_err());
    assert!(ExperimentConfig::default().validate().is_ok());
}

#[test]
fn test_link_prediction_transformer() {
    let config = get_config();
    let graphs = get_graphs();
    let text = graphs
        .iter()
        .enumerate()
        .map(|(i, x)| x.as_input_rows(i))
        .collect::<Vec<String>>()
        .join("\n");
    let expected = graphs
        .iter()
        .enumerate()
        .flat_map(|(i, x)| {
            LinkPredictionTransformer::benchmark_graph(x, &config, i as i64)
                .unwrap()
                .into_iter()
                .map(move |r| format!("{}\t{}", i, r.to_json()))
        })
        .collect::<Vec<String>>()
        .join("\n");

    let output_str = run_transformer(config, &text).unwrap();
    assert_eq!(output_str, expected + "\n");
    assert_eq!(output_str.lines().count(), 3 * 6);
}

#[test]
fn test_transformer_largest_cc() {
    let mut config = get_config();
    config.largest_cc = true;
    // a triangle plus a separate 5-cycle; only the cycle is benchmarked
    let text = "g\t0\t1\ng\t1\t2\ng\t2\t0\ng\t10\t11\ng\t11\t12\ng\t12\t13\ng\t13\t14\ng\t14\t10";
    let output_str = run_transformer(config.clone(), text).unwrap();
    let cycle = SimpleUndirectedGraphBuilder::from_vector(&vec![
        (10, 11),
        (11, 12),
        (12, 13),
        (13, 14),
        (14, 10),
    ]);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let expected = run_experiment(&cycle, &config, &mut rng)
        .unwrap()
        .iter()
        .map(|r| format!("g\t{}", r.to_json()))
        .collect::<Vec<String>>()
        .join("\n");
    assert_eq!(output_str, expected + "\n");
}

#[test]
fn test_transformer_errors() {
    assert!(run_transformer(get_config(), "").is_err());
    assert!(run_transformer(get_config(), "0\t1").is_err());
    assert!(run_transformer(get_config(), "0\t1\tx").is_err());
}

#[test]
fn test_string_output_collects_lines() {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut output = Output::string(&mut buffer);
        output.print("0\t{}".to_string()).unwrap();
        output.print("1\t{}".to_string()).unwrap();
    }
    assert_eq!(String::from_utf8(buffer).unwrap(), "0\t{}\n1\t{}\n");
}
