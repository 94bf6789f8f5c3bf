//! Whitespace-tokenized console input
//!
//! Prompts consume one token at a time, so several answers can be typed on
//! one line (`1234567 abcdef`) or spread over several.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::AtmResult;

/// Reads whitespace-separated tokens from a line-oriented source
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> AtmResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
