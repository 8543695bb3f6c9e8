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

/// Index-based slicing over a traversal: skip `start` elements, then yield
/// every `step`-th element until `stop` (exclusive) or exhaustion.
///
/// Skipped elements are still read from the source (O(start) reads); there is
/// no random access over a pull-based stream. The caller validates
/// `step >= 1` before constructing this iterator.
pub struct Slice<T: Clone> {
    source: ChainCursor<T>,
    next_index: usize,
    pos: usize,
    stop: Option<usize>,
    step: usize,
}

impl<T: Clone> Slice<T> {
    /// Creates a slice of `source`. `stop` of `None` means "until exhaustion".
    pub fn new(source: ChainCursor<T>, start: usize, stop: Option<usize>, step: usize) -> Self {
        debug_assert!(step >= 1, "Slice step must be at least 1");
        Self {
            source,
            next_index: start,
            pos: 0,
            stop,
            step,
        }
    }
}

impl<T: Clone> Iterator for Slice<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(stop) = self.stop {
                if self.next_index >= stop {
                    return None;
                }
            }
            let item = self.source.next()?;
            let current = self.pos;
            self.pos += 1;
            if current == self.next_index {
                self.next_index += self.step;
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.stop.map(|s| s.saturating_sub(self.next_index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::{Segment, SegmentChain};

    fn cursor_of(items: Vec<i32>) -> ChainCursor<i32> {
        SegmentChain::from_segment(Segment::owned(items)).cursor()
    }

    #[test]
    fn test_head_slice() {
        let out: Vec<_> = Slice::new(cursor_of((0..10).collect()), 0, Some(3), 1).collect();
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn test_skip_and_stop() {
        let out: Vec<_> = Slice::new(cursor_of((0..10).collect()), 2, Some(7), 1).collect();
        assert_eq!(out, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_stepped_slice() {
        let out: Vec<_> = Slice::new(cursor_of((0..10).collect()), 1, None, 3).collect();
        assert_eq!(out, vec![1, 4, 7]);
    }

    #[test]
    fn test_stop_before_start_is_empty() {
        let out: Vec<_> = Slice::new(cursor_of((0..10).collect()), 5, Some(2), 1).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_exhaustion_before_stop() {
        let out: Vec<_> = Slice::new(cursor_of(vec![1, 2]), 0, Some(100), 1).collect();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_start_beyond_input() {
        let out: Vec<_> = Slice::new(cursor_of(vec![1, 2]), 5, None, 1).collect();
        assert!(out.is_empty());
    }
}
