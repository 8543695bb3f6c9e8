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

use hawser_core::ChainCursor;
use std::collections::VecDeque;

/// The last `n` elements of a traversal.
///
/// Requires one full pass over the source, performed on the first pull, and
/// an O(n) ring buffer; the buffer never grows beyond the window size. A
/// window of zero still drains the source (the pass is what defines "last")
/// and yields nothing.
pub struct Tail<T: Clone> {
    source: Option<ChainCursor<T>>,
    buffer: VecDeque<T>,
    window: usize,
}

impl<T: Clone> Tail<T> {
    pub fn new(source: ChainCursor<T>, window: usize) -> Self {
        Self {
            source: Some(source),
            buffer: VecDeque::with_capacity(window),
            window,
        }
    }

    fn fill(&mut self) {
        if let Some(source) = self.source.take() {
            for item in source {
                if self.buffer.len() == self.window {
                    self.buffer.pop_front();
                }
                if self.window > 0 {
                    self.buffer.push_back(item);
                }
            }
        }
    }
}

impl<T: Clone> Iterator for Tail<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.fill();
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.source.is_some() {
            (0, Some(self.window))
        } else {
            (self.buffer.len(), Some(self.buffer.len()))
        }
    }
}

impl<T: Clone> std::iter::FusedIterator for Tail<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::{Segment, SegmentChain};

    fn cursor_of(items: Vec<i32>) -> ChainCursor<i32> {
        SegmentChain::from_segment(Segment::owned(items)).cursor()
    }

    #[test]
    fn test_last_n_elements() {
        let out: Vec<_> = Tail::new(cursor_of((0..10).collect()), 3).collect();
        assert_eq!(out, vec![7, 8, 9]);
    }

    #[test]
    fn test_window_larger_than_input() {
        let out: Vec<_> = Tail::new(cursor_of(vec![1, 2]), 5).collect();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_zero_window_is_empty() {
        let out: Vec<_> = Tail::new(cursor_of(vec![1, 2, 3]), 0).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_window_still_drains_source() {
        let chain = SegmentChain::from_segment(Segment::derived(0..5));
        let mut tail = Tail::new(chain.cursor(), 0);
        assert_eq!(tail.next(), None);
        // The shared cursor was consumed by the defining pass.
        assert_eq!(chain.cursor().count(), 0);
    }
}
