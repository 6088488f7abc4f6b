/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod algorithms;
pub mod edge;
pub mod error;
pub mod graph_base;
pub mod id_types;
pub mod input;
pub mod line_processor;
pub mod link_prediction;
pub mod link_prediction_transformer;
pub mod node;
pub mod output;
pub mod row;
pub mod simple_undirected_graph;
pub mod simple_undirected_graph_builder;
pub mod transformer_base;
