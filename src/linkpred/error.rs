/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type LPResult<T> = std::result::Result<T, LPError>;

#[derive(Debug, Error)]
pub enum LPError {
    #[error("{0}")]
    Generic(String),

    /// Caller violated an input contract (bad fraction, empty graph, k = 0, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl LPError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub fn err_none() -> Self {
        Self::Generic("Unexpectedly empty Option encountered.".to_owned())
    }
}

impl From<String> for LPError {
    fn from(str: String) -> Self {
        LPError::Generic(str)
    }
}

impl From<&str> for LPError {
    fn from(str: &str) -> Self {
        LPError::Generic(str.to_owned())
    }
}
