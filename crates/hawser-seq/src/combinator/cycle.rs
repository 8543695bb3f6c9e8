// Copyright (c) 2025 the Hawser contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! End-to-end replay of a sequence.
//!
//! Two strategies, picked by the operand's restartability:
//!
//! - A fully owned chain reopens a fresh cursor for every pass. No auxiliary
//!   storage at all.
//! - A chain containing any external segment cannot be re-traversed (a second
//!   pass would alias the drained cursor and replay nothing), so the first
//!   pass is buffered in full and later passes replay the buffer. The buffer
//!   costs O(length of one pass) and is unavoidable for a genuinely
//!   single-pass source.

use hawser_core::{ChainCursor, SegmentChain};

/// Replays the full sequence end-to-end a bounded or unbounded number of
/// times.
///
/// Cycling an empty sequence terminates immediately instead of spinning on
/// empty passes forever.
pub struct Cycle<T: Clone> {
    mode: Mode<T>,
    passes_left: Option<usize>,
}

enum Mode<T: Clone> {
    /// Fresh cursor per pass over an all-owned chain.
    Restartable {
        chain: SegmentChain<T>,
        cursor: ChainCursor<T>,
        yielded_this_pass: bool,
    },
    /// Stream the first pass into a buffer, then replay it.
    Buffered {
        first_pass: Option<ChainCursor<T>>,
        buffer: Vec<T>,
        pos: usize,
    },
}

impl<T: Clone> Cycle<T> {
    /// Creates a cycle over `chain`. `passes` of `None` means unbounded.
    pub fn new(chain: &SegmentChain<T>, passes: Option<usize>) -> Self {
        let mode = if chain.is_restartable() {
            Mode::Restartable {
                chain: chain.clone(),
                cursor: chain.cursor(),
                yielded_this_pass: false,
            }
        } else {
            Mode::Buffered {
                first_pass: Some(chain.cursor()),
                buffer: Vec::new(),
                pos: 0,
            }
        };
        Self {
            mode,
            passes_left: passes,
        }
    }

    /// Consumes one pass from the budget. Returns `false` if the budget is
    /// spent.
    fn finish_pass(&mut self) -> bool {
        match &mut self.passes_left {
            None => true,
            Some(n) => {
                *n -= 1;
                *n > 0
            }
        }
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.passes_left == Some(0) {
            return None;
        }
        loop {
            match &mut self.mode {
                Mode::Restartable {
                    chain,
                    cursor,
                    yielded_this_pass,
                } => {
                    if let Some(item) = cursor.next() {
                        *yielded_this_pass = true;
                        return Some(item);
                    }
                    if !*yielded_this_pass {
                        // Empty sequence: no pass will ever yield.
                        self.passes_left = Some(0);
                        return None;
                    }
                    let fresh = chain.cursor();
                    *cursor = fresh;
                    *yielded_this_pass = false;
                    if !self.finish_pass() {
                        return None;
                    }
                }
                Mode::Buffered {
                    first_pass,
                    buffer,
                    pos,
                } => {
                    if let Some(source) = first_pass {
                        if let Some(item) = source.next() {
                            buffer.push(item.clone());
                            return Some(item);
                        }
                        *first_pass = None;
                        if buffer.is_empty() {
                            self.passes_left = Some(0);
                            return None;
                        }
                        *pos = 0;
                        if !self.finish_pass() {
                            return None;
                        }
                    } else if *pos < buffer.len() {
                        let item = buffer[*pos].clone();
                        *pos += 1;
                        return Some(item);
                    } else {
                        *pos = 0;
                        if !self.finish_pass() {
                            return None;
                        }
                    }
                }
            }
        }
    }
}
