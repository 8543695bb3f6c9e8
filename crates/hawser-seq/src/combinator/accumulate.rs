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

/// An iterator of running reductions.
///
/// Without an initial value, the output has the input's length and its first
/// element is the first input element. With an initial value, the output is
/// prefixed by it and is one element longer than the input; in particular an
/// empty input still produces the single initial element.
pub struct Accumulate<T: Clone, F> {
    source: ChainCursor<T>,
    combine: F,
    acc: Option<T>,
    initial: Option<T>,
}

impl<T: Clone, F> Accumulate<T, F>
where
    F: FnMut(T, T) -> T,
{
    /// Creates a running reduction without an initial value.
    pub fn new(source: ChainCursor<T>, combine: F) -> Self {
        Self {
            source,
            combine,
            acc: None,
            initial: None,
        }
    }

    /// Creates a running reduction seeded with `initial`.
    pub fn with_initial(source: ChainCursor<T>, combine: F, initial: T) -> Self {
        Self {
            source,
            combine,
            acc: None,
            initial: Some(initial),
        }
    }
}

impl<T: Clone, F> Iterator for Accumulate<T, F>
where
    F: FnMut(T, T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(initial) = self.initial.take() {
            self.acc = Some(initial.clone());
            return Some(initial);
        }
        match &mut self.acc {
            None => {
                let first = self.source.next()?;
                self.acc = Some(first.clone());
                Some(first)
            }
            Some(acc) => {
                let item = self.source.next()?;
                let next = (self.combine)(acc.clone(), item);
                *acc = next.clone();
                Some(next)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let extra = usize::from(self.initial.is_some());
        (lower + extra, upper.map(|u| u + extra))
    }
}
