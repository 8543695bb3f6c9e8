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

//! Predicate-bounded slicing: suppress a prefix (`DropWhile`) or keep only a
//! prefix (`TakeWhile`). Both latch their predicate's first failure and never
//! re-check it afterwards.

use hawser_core::ChainCursor;

/// Suppresses elements while the predicate holds, then yields everything else
/// unconditionally.
pub struct DropWhile<T: Clone, P> {
    source: ChainCursor<T>,
    predicate: P,
    dropping: bool,
}

impl<T: Clone, P> DropWhile<T, P>
where
    P: FnMut(&T) -> bool,
{
    pub fn new(source: ChainCursor<T>, predicate: P) -> Self {
        Self {
            source,
            predicate,
            dropping: true,
        }
    }
}

impl<T: Clone, P> Iterator for DropWhile<T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.dropping {
            loop {
                let item = self.source.next()?;
                if !(self.predicate)(&item) {
                    self.dropping = false;
                    return Some(item);
                }
            }
        }
        self.source.next()
    }
}

/// Yields elements while the predicate holds; stops permanently at the first
/// failure.
pub struct TakeWhile<T: Clone, P> {
    source: ChainCursor<T>,
    predicate: P,
    done: bool,
}

impl<T: Clone, P> TakeWhile<T, P>
where
    P: FnMut(&T) -> bool,
{
    pub fn new(source: ChainCursor<T>, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<T: Clone, P> Iterator for TakeWhile<T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.source.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }
}

impl<T: Clone, P> std::iter::FusedIterator for TakeWhile<T, P> where P: FnMut(&T) -> bool {}
