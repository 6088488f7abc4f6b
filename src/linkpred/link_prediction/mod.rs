/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod edge_splitter;
pub mod evaluator;
pub mod experiment;
pub mod neighborhood;
pub mod scorers;
