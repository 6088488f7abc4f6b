/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_linkpred;
use lib_linkpred::linkpred::edge::Edge;
use lib_linkpred::linkpred::graph_base::GraphBase;
use lib_linkpred::linkpred::id_types::NodeId;
use lib_linkpred::linkpred::link_prediction::evaluator::{evaluate, rank};
use lib_linkpred::linkpred::link_prediction::scorers::{
    AdamicAdar, CommonNeighbors, Jaccard, LinkPredictor,
};
use lib_linkpred::linkpred::simple_undirected_graph::SimpleUndirectedGraph;
use lib_linkpred::linkpred::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;

// Zachary's karate club, nodes labeled 1..=34.
fn get_karate_club_graph() -> SimpleUndirectedGraph {
    let v = vec![
        (1, 2), (1, 3), (2, 3), (1, 4), (2, 4), (3, 4), (1, 5), (1, 6), (1, 7), (5, 7),
        (6, 7), (1, 8), (2, 8), (3, 8), (4, 8), (1, 9), (3, 9), (3, 10), (1, 11), (5, 11),
        (6, 11), (1, 12), (1, 13), (4, 13), (1, 14), (2, 14), (3, 14), (4, 14), (6, 17),
        (7, 17), (1, 18), (2, 18), (1, 20), (2, 20), (1, 22), (2, 22), (24, 26), (25, 26),
        (3, 28), (24, 28), (25, 28), (3, 29), (24, 30), (27, 30), (2, 31), (9, 31), (1, 32),
        (25, 32), (26, 32), (29, 32), (3, 33), (9, 33), (15, 33), (16, 33), (19, 33),
        (21, 33), (23, 33), (24, 33), (30, 33), (31, 33), (32, 33), (9, 34), (10, 34),
        (14, 34), (15, 34), (16, 34), (19, 34), (20, 34), (21, 34), (23, 34), (24, 34),
        (27, 34), (28, 34), (29, 34), (30, 34), (31, 34), (32, 34), (33, 34),
    ];
    SimpleUndirectedGraphBuilder::from_vector(&v)
}

fn id(x: i64) -> NodeId {
    NodeId::from(x)
}

#[test]
fn test_karate_club_scores() {
    let graph = get_karate_club_graph();
    assert_eq!(graph.count_nodes(), 34);
    assert_eq!(graph.count_edges(), 78);

    let cn = CommonNeighbors::new(&graph);
    let candidates = cn.fit();
    assert_eq!(candidates.len(), 483);
    assert_eq!(candidates.iter().filter(|p| p.score == 0.0).count(), 218);
    assert_eq!(cn.score(id(1), id(34)), Some(4.0));

    let jaccard = Jaccard::new(&graph).score(id(1), id(34)).unwrap();
    assert!((jaccard - 4.0 / 29.0).abs() < 1e-9);
    let aa = AdamicAdar::new(&graph).score(id(1), id(34)).unwrap();
    assert!((aa - 2.7110197222973085).abs() < 1e-9);
}

#[test]
fn test_karate_club_rankings() {
    let graph = get_karate_club_graph();
    let cn_ranking = rank(&CommonNeighbors::new(&graph).fit());
    // (1, 34) and (8, 14) tie at 4 and keep enumeration order
    assert_eq!(
        cn_ranking[..4].to_vec(),
        vec![Edge::new(3, 34), Edge::new(1, 34), Edge::new(8, 14), Edge::new(1, 33)]
    );
    let aa_ranking = rank(&AdamicAdar::new(&graph).fit());
    assert_eq!(
        aa_ranking[..3].to_vec(),
        vec![Edge::new(3, 34), Edge::new(1, 34), Edge::new(2, 34)]
    );
    let jaccard_ranking = rank(&Jaccard::new(&graph).fit());
    assert_eq!(
        jaccard_ranking[..3].to_vec(),
        vec![Edge::new(15, 16), Edge::new(15, 19), Edge::new(15, 21)]
    );
}

#[test]
fn test_karate_club_evaluation() {
    let graph = get_karate_club_graph();
    let hidden = vec![Edge::new(34, 3), Edge::new(8, 14), Edge::new(5, 6)];
    let results = evaluate(&CommonNeighbors::new(&graph).fit(), &hidden, &[1, 3, 483, 1000]).unwrap();
    assert_eq!(results[0].hits, 1);
    assert_eq!(results[1].hits, 2);
    assert!((results[1].precision - 2.0 / 3.0).abs() < 1e-9);
    assert!((results[1].recall - 2.0 / 3.0).abs() < 1e-9);
    // every candidate is ranked
    assert_eq!(results[2].hits, 3);
    assert_eq!(results[2].recall, 1.0);
    // requested k is the denominator even past the end of the ranking
    assert_eq!(results[3].hits, 3);
    assert!((results[3].precision - 0.003).abs() < 1e-12);
}
