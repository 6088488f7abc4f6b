/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, Write};

use crate::linkpred::error::LPResult;

/// Result sink: stdout when `destination` is `None`, otherwise a
/// caller-owned buffer (used by tests).
pub struct Output<'a> {
    destination: Option<&'a mut Vec<u8>>,
}

impl<'a> Output<'a> {
    pub fn console() -> Output<'a> {
        Output { destination: None }
    }
    pub fn string(text: &'a mut Vec<u8>) -> Output<'a> {
        Output {
            destination: Some(text),
        }
    }
    pub fn print(&mut self, text: String) -> LPResult<()> {
        if self.destination.is_none() {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
            return Ok(());
        }
        self.write_all(text.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()?;
        Ok(())
    }
}
impl<'a> Write for Output<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.destination {
            Some(ref mut destination) => destination.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.destination {
            Some(ref mut destination) => destination.flush(),
            None => io::stdout().flush(),
        }
    }
}
