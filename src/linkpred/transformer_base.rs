/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::id_types::GraphId;
use crate::linkpred::input::Input;
use crate::linkpred::line_processor::LineProcessor;
use crate::linkpred::output::Output;
use crate::linkpred::row::SimpleEdgeRow;
use std::io::prelude::*;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;

pub trait TransformerBase {
    fn get_line_processor(&self) -> Arc<LineProcessor>;
    // logic for taking row and storing into self via side-effect
    fn process_row(&mut self, row: SimpleEdgeRow) -> LPResult<()>;
    // logic for processing batch of rows, once all rows are ready
    fn process_batch(&self, graph_id: GraphId, output: &Sender<String>) -> LPResult<()>;
    // reset transformer state after processing;
    fn reset(&mut self) -> LPResult<()>;

    // main loop, runs through lines ordered by graph_id, updates state accordingly
    // and runs process_batch when graph_id changes. Output lines are written by
    // a separate thread as batches produce them.
    fn run(&mut self, input: Input, mut output: Output) -> LPResult<()> {
        let ret = crossbeam::scope(|scope| -> LPResult<()> {
            let line_processor = self.get_line_processor();
            let (sender, receiver) = channel::<String>();
            let writer = scope.spawn(move |_| -> LPResult<()> {
                for line in receiver {
                    output.print(line)?;
                }
                Ok(())
            });
            let mut current_graph_id: Option<GraphId> = None;
            for line in input.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let row: SimpleEdgeRow = line_processor.process_line(&line)?;
                let new_graph_id: GraphId = row.graph_id;
                if let Some(some_current_graph_id) = current_graph_id {
                    if new_graph_id != some_current_graph_id {
                        self.process_batch(some_current_graph_id, &sender)?;
                        self.reset()?;
                    }
                }
                current_graph_id = Some(new_graph_id);
                self.process_row(row)?;
            }
            let some_current_graph_id = current_graph_id.ok_or_else(|| LPError::from("No input rows!"))?;
            self.process_batch(some_current_graph_id, &sender)?;
            drop(sender);
            writer
                .join()
                .map_err(|_| LPError::new("Output writer panicked."))?
        });
        ret.map_err(|_| LPError::new("Transformer thread panicked."))?
    }
}
