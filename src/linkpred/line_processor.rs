/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::linkpred::error::{LPError, LPResult};
use crate::linkpred::id_types::{GraphId, NodeId};
use crate::linkpred::row::SimpleEdgeRow;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// deals with processing lines and turning them into rows.
/// Can mutate ids and reverse_ids maps that keep track of
/// graph_ids seen so far.
pub struct LineProcessor {
    ids: Arc<RwLock<HashMap<String, i64>>>,
    reverse_ids: Arc<RwLock<Vec<String>>>,
}
impl LineProcessor {
    pub fn new() -> Self {
        Self {
            ids: Arc::new(RwLock::new(HashMap::new())),
            reverse_ids: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Parses `graph_key \t source_id \t target_id`.
    pub fn process_line(&self, line: &str) -> LPResult<SimpleEdgeRow> {
        let vec: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        if vec.len() != 3 {
            return Err(LPError::invalid_input(format!(
                "expected 3 tab-separated fields, got {}: {:?}",
                vec.len(),
                line
            )));
        }
        let graph_id = self.record_new_key_or_return_current_one(vec[0])?;
        let source_id: NodeId = vec[1].trim().parse::<i64>()?.into();
        let target_id: NodeId = vec[2].trim().parse::<i64>()?.into();
        Ok(SimpleEdgeRow {
            graph_id,
            source_id,
            target_id,
        })
    }

    fn record_new_key_or_return_current_one(&self, key: &str) -> LPResult<GraphId> {
        let mut ids = self.ids.write().map_err(|_| LPError::new("poisoned id map"))?;
        if let Some(id) = ids.get(key) {
            return Ok(GraphId::from(*id));
        }
        let mut reverse_ids = self
            .reverse_ids
            .write()
            .map_err(|_| LPError::new("poisoned id map"))?;
        let id = ids.len() as i64;
        ids.insert(key.to_owned(), id);
        reverse_ids.push(key.to_owned());
        Ok(GraphId::from(id))
    }

    pub fn get_original_id(&self, local_id: usize) -> LPResult<String> {
        let reverse_ids = self
            .reverse_ids
            .read()
            .map_err(|_| LPError::new("poisoned id map"))?;
        reverse_ids
            .get(local_id)
            .cloned()
            .ok_or_else(LPError::err_none)
    }
}
impl Default for LineProcessor {
    fn default() -> Self {
        LineProcessor::new()
    }
}
