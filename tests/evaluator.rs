/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_linkpred;
use fxhash::FxHashSet;
use lib_linkpred::linkpred::edge::Edge;
use lib_linkpred::linkpred::error::LPError;
use lib_linkpred::linkpred::link_prediction::edge_splitter::EdgeSplitter;
use lib_linkpred::linkpred::link_prediction::evaluator::{evaluate, rank, EvaluationResult};
use lib_linkpred::linkpred::link_prediction::scorers::{Jaccard, LinkPredictor, ScoredPair};
use lib_linkpred::linkpred::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pair(u: i64, v: i64, score: f64) -> ScoredPair {
    ScoredPair {
        edge: Edge::new(u, v),
        score,
    }
}

#[test]
fn test_precision_and_recall_at_k() {
    let scored = vec![pair(1, 3, 0.5), pair(0, 3, 2.0)];
    let results = evaluate(&scored, &[Edge::new(0, 3)], &[1, 2]).unwrap();
    assert_eq!(
        results,
        vec![
            EvaluationResult {
                k: 1,
                hits: 1,
                precision: 1.0,
                recall: 1.0
            },
            EvaluationResult {
                k: 2,
                hits: 1,
                precision: 0.5,
                recall: 1.0
            },
        ]
    );
}

#[test]
fn test_removed_edges_are_matched_regardless_of_orientation() {
    let scored = vec![pair(3, 0, 2.0), pair(1, 3, 0.5)];
    let results = evaluate(&scored, &[Edge::new(3, 0)], &[1]).unwrap();
    assert_eq!(results[0].hits, 1);
}

#[test]
fn test_k_beyond_candidates_divides_by_k() {
    let scored = vec![pair(0, 1, 1.0), pair(0, 2, 0.5)];
    let removed = vec![Edge::new(0, 1), Edge::new(0, 2)];
    let results = evaluate(&scored, &removed, &[10]).unwrap();
    assert_eq!(results[0].hits, 2);
    assert_eq!(results[0].precision, 0.2);
    assert_eq!(results[0].recall, 1.0);
}

#[test]
fn test_results_follow_k_list_order() {
    let scored = vec![pair(0, 1, 3.0), pair(0, 2, 2.0), pair(0, 3, 1.0)];
    let removed = vec![Edge::new(0, 2)];
    let results = evaluate(&scored, &removed, &[3, 1, 2, 1]).unwrap();
    let ks: Vec<usize> = results.iter().map(|r| r.k).collect();
    assert_eq!(ks, vec![3, 1, 2, 1]);
    let hits: Vec<usize> = results.iter().map(|r| r.hits).collect();
    assert_eq!(hits, vec![1, 0, 1, 0]);
}

#[test]
fn test_empty_removed_set_has_zero_recall() {
    let scored = vec![pair(0, 1, 1.0)];
    let results = evaluate(&scored, &[], &[1, 5]).unwrap();
    for result in results {
        assert_eq!(result.hits, 0);
        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
    }
}

#[test]
fn test_zero_cutoff_is_rejected() {
    let scored = vec![pair(0, 1, 1.0)];
    assert!(matches!(
        evaluate(&scored, &[Edge::new(0, 1)], &[5, 0]),
        Err(LPError::InvalidInput(_))
    ));
}

#[test]
fn test_ties_keep_enumeration_order() {
    let scored = vec![
        pair(0, 1, 1.0),
        pair(0, 2, 3.0),
        pair(0, 3, 1.0),
        pair(1, 2, 3.0),
        pair(1, 3, 1.0),
    ];
    assert_eq!(
        rank(&scored),
        vec![
            Edge::new(0, 2),
            Edge::new(1, 2),
            Edge::new(0, 1),
            Edge::new(0, 3),
            Edge::new(1, 3),
        ]
    );
    // same input, same ranking
    assert_eq!(rank(&scored), rank(&scored.clone()));
    let results = evaluate(&scored, &[Edge::new(0, 3)], &[3, 4]).unwrap();
    assert_eq!(results[0].hits, 0);
    assert_eq!(results[1].hits, 1);
}

#[test]
fn test_uninformative_jaccard_ranking() {
    // a perfect matching: no pair shares a neighbor, so every Jaccard score is 0
    // and the ranking is the enumeration order.
    let graph = SimpleUndirectedGraphBuilder::from_vector(&vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let split = graph.split_edges(0.5, &mut rng).unwrap();
        assert_eq!(split.removed_edges.len(), 2);
        let scored = Jaccard::new(&split.training_graph).fit();
        assert_eq!(scored.len(), 26);
        assert!(scored.iter().all(|p| p.score == 0.0));
        let hidden: FxHashSet<Edge> = split.removed_edges.iter().cloned().collect();
        let k_list = vec![1, 5, 10, 20, 26];
        let results = evaluate(&scored, &split.removed_edges, &k_list).unwrap();
        for (k, result) in k_list.iter().zip(results.iter()) {
            let enumerated = scored
                .iter()
                .take(*k)
                .filter(|p| hidden.contains(&p.edge))
                .count();
            assert_eq!(result.hits, enumerated);
            assert_eq!(result.precision == 0.0, enumerated == 0);
        }
        // (0, 2) is enumerated first and was never an edge
        assert_eq!(scored[0].edge, Edge::new(0, 2));
        assert_eq!(results[0].hits, 0);
        assert_eq!(results[4].hits, 2);
    }
}

#[test]
fn test_to_json() {
    let result = EvaluationResult {
        k: 2,
        hits: 1,
        precision: 0.5,
        recall: 1.0,
    };
    assert_eq!(
        result.to_json().to_string(),
        r#"{"hits":1,"k":2,"precision":0.5,"recall":1.0}"#
    );
}
