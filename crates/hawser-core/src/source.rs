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

//! # Segment Sources
//!
//! A segment is one contiguous, independently-sourced span of a sequence's
//! logical contents. It comes in two flavors with very different traversal
//! economics:
//!
//! - [`Segment::Owned`]: a materialized backing store. Opening a cursor is
//!   idempotent and side-effect-free; every cursor starts at position zero.
//! - [`Segment::External`]: a caller-supplied forward-only cursor. Opening a
//!   "cursor" hands back the *same* shared cursor every time, so advancing it
//!   from any handle advances it for all handles — including handles held by
//!   code outside this library. This is a documented hazard, not a defect.
//!
//! The [`SequenceSource`] trait is the minimal "sequential source" capability
//! a value must offer to back a segment. It replaces duck-typed "anything
//! iterable" acceptance with a compile-time checked interface, so an
//! unsuitable source fails at the construction call rather than deep inside a
//! lazy traversal.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A handle to a caller-supplied forward-only cursor.
///
/// All clones of an `ExternalSource` share the same underlying iterator and
/// therefore the same progress: pulling an element through one handle removes
/// it from every handle's view. Consumption of the original iterator by code
/// outside this library is observable through the wrapper, and vice versa.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::source::ExternalSource;
///
/// let src = ExternalSource::new(vec![1, 2, 3].into_iter());
/// let alias = src.clone();
///
/// assert_eq!(src.pull(), Some(1));
/// // The alias shares the same progress.
/// assert_eq!(alias.pull(), Some(2));
/// assert_eq!(src.pull(), Some(3));
/// assert_eq!(src.pull(), None);
/// ```
pub struct ExternalSource<T> {
    inner: Rc<RefCell<Box<dyn Iterator<Item = T>>>>,
}

impl<T> ExternalSource<T> {
    /// Wraps a forward-only cursor in a shared handle.
    ///
    /// The iterator is fused so that pulling past exhaustion stays exhausted.
    #[inline]
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Box::new(iter.fuse()))),
        }
    }

    /// Advances the sole live cursor by one element.
    ///
    /// Returns `None` once the underlying iterator is exhausted.
    #[inline]
    pub fn pull(&self) -> Option<T> {
        self.inner.borrow_mut().next()
    }
}

impl<T> Clone for ExternalSource<T> {
    /// Clones the *handle*, not the stream. Both handles alias the same
    /// progress state.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Iterator for ExternalSource<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }
}

impl<T> std::fmt::Debug for ExternalSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalSource").finish_non_exhaustive()
    }
}

/// One contiguous, independently-sourced span of a sequence's contents.
///
/// A segment never loses an element through a read it did not itself request;
/// reads are strictly forward-only.
///
/// Owned storage is reference-counted so that derived chains can reference
/// the same elements without copying them. Structural edits use clone-on-write
/// semantics (see `SegmentChain`).
pub enum Segment<T> {
    /// A materialized, cheaply restartable backing store.
    Owned(Rc<Vec<T>>),
    /// A caller-supplied (or synthesized) single-use cursor.
    External(ExternalSource<T>),
}

impl<T> Segment<T> {
    /// Creates a materialized segment from a vector of elements.
    #[inline]
    pub fn owned(items: Vec<T>) -> Self {
        Segment::Owned(Rc::new(items))
    }

    /// Creates a materialized segment holding exactly one element.
    #[inline]
    pub fn singleton(item: T) -> Self {
        Segment::owned(vec![item])
    }

    /// Creates a segment backed by a shared external cursor.
    #[inline]
    pub fn external(source: ExternalSource<T>) -> Self {
        Segment::External(source)
    }

    /// Creates a segment backed by a freshly synthesized single-use stream.
    ///
    /// This is how combinator outputs are wrapped: the derived stream obeys
    /// the same single-pass contract as a caller-supplied cursor.
    #[inline]
    pub fn derived<I>(stream: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Segment::External(ExternalSource::new(stream))
    }

    /// Returns `true` if opening a cursor is idempotent and side-effect-free.
    #[inline]
    pub fn is_restartable(&self) -> bool {
        matches!(self, Segment::Owned(_))
    }

    /// Returns the segment's length, when it is knowable without traversal.
    ///
    /// External segments report `None`: their length is only observable by
    /// draining them.
    #[inline]
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Segment::Owned(data) => Some(data.len()),
            Segment::External(_) => None,
        }
    }

    /// Opens a traversal cursor over this segment.
    ///
    /// For owned segments this starts a fresh pass at position zero. For
    /// external segments this hands back the sole live cursor: two call sites
    /// opening "separate" cursors share the same progress state.
    #[inline]
    pub fn open_cursor(&self) -> SegmentCursor<T> {
        match self {
            Segment::Owned(data) => SegmentCursor::Owned {
                data: Rc::clone(data),
                pos: 0,
            },
            Segment::External(source) => SegmentCursor::External(source.clone()),
        }
    }
}

impl<T> Clone for Segment<T> {
    /// Clones the segment *handle*: owned storage is shared by reference
    /// count, external cursors keep aliasing the same progress.
    fn clone(&self) -> Self {
        match self {
            Segment::Owned(data) => Segment::Owned(Rc::clone(data)),
            Segment::External(source) => Segment::External(source.clone()),
        }
    }
}

impl<T> std::fmt::Debug for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Owned(data) => write!(f, "Segment::Owned(len={})", data.len()),
            Segment::External(_) => write!(f, "Segment::External"),
        }
    }
}

/// A traversal cursor over a single segment.
///
/// Owned cursors clone elements out of shared storage and never disturb other
/// cursors. External cursors pull destructively from the shared stream.
pub enum SegmentCursor<T> {
    /// Fresh pass over materialized storage.
    Owned {
        /// Shared backing store.
        data: Rc<Vec<T>>,
        /// Next position to yield.
        pos: usize,
    },
    /// The shared single-use cursor.
    External(ExternalSource<T>),
}

impl<T: Clone> Iterator for SegmentCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SegmentCursor::Owned { data, pos } => {
                let item = data.get(*pos).cloned();
                if item.is_some() {
                    *pos += 1;
                }
                item
            }
            SegmentCursor::External(source) => source.pull(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SegmentCursor::Owned { data, pos } => {
                let rest = data.len().saturating_sub(*pos);
                (rest, Some(rest))
            }
            SegmentCursor::External(_) => (0, None),
        }
    }
}

impl<T: Clone> std::iter::FusedIterator for SegmentCursor<T> {}

/// The minimal "sequential source" capability.
///
/// A value that can back a segment of a sequence implements this trait. The
/// bound is checked at the construction call site, so an unsuitable source is
/// a compile error rather than a failure deferred into lazy traversal.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::source::{Segment, SequenceSource};
///
/// let seg = vec![1, 2, 3].into_segment();
/// assert!(seg.is_restartable());
/// assert_eq!(seg.known_len(), Some(3));
/// ```
pub trait SequenceSource<T> {
    /// Converts this value into a segment.
    fn into_segment(self) -> Segment<T>;
}

impl<T> SequenceSource<T> for Vec<T> {
    #[inline]
    fn into_segment(self) -> Segment<T> {
        Segment::owned(self)
    }
}

impl<T, const N: usize> SequenceSource<T> for [T; N] {
    #[inline]
    fn into_segment(self) -> Segment<T> {
        Segment::owned(self.into())
    }
}

impl<T: Clone> SequenceSource<T> for &[T] {
    #[inline]
    fn into_segment(self) -> Segment<T> {
        Segment::owned(self.to_vec())
    }
}

impl<T> SequenceSource<T> for VecDeque<T> {
    #[inline]
    fn into_segment(self) -> Segment<T> {
        Segment::owned(self.into_iter().collect())
    }
}

impl<T> SequenceSource<T> for ExternalSource<T> {
    #[inline]
    fn into_segment(self) -> Segment<T> {
        Segment::external(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_cursor_is_repeatable() {
        let seg = Segment::owned(vec![1, 2, 3]);

        let first: Vec<_> = seg.open_cursor().collect();
        let second: Vec<_> = seg.open_cursor().collect();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![1, 2, 3]);
    }

    #[test]
    fn test_external_cursor_aliases_progress() {
        let seg = Segment::derived(0..4);

        let mut a = seg.open_cursor();
        let mut b = seg.open_cursor();

        assert_eq!(a.next(), Some(0));
        assert_eq!(b.next(), Some(1)); // shared progress
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(3));
        assert_eq!(a.next(), None);
        assert_eq!(b.next(), None);
    }

    #[test]
    fn test_external_consumption_is_observable_both_ways() {
        let handle = ExternalSource::new(vec!["a", "b", "c"].into_iter());
        let seg = Segment::external(handle.clone());

        // Outside code drains one element through the original handle.
        assert_eq!(handle.pull(), Some("a"));

        // The wrapper observes the drain.
        let rest: Vec<_> = seg.open_cursor().collect();
        assert_eq!(rest, vec!["b", "c"]);

        // And the wrapper's reads are visible to the original handle.
        assert_eq!(handle.pull(), None);
    }

    #[test]
    fn test_known_len() {
        assert_eq!(Segment::owned(vec![1, 2]).known_len(), Some(2));
        assert_eq!(Segment::<i32>::derived(std::iter::empty()).known_len(), None);
    }

    #[test]
    fn test_pull_past_exhaustion_stays_exhausted() {
        let src = ExternalSource::new(vec![1].into_iter());
        assert_eq!(src.pull(), Some(1));
        assert_eq!(src.pull(), None);
        assert_eq!(src.pull(), None);
    }

    #[test]
    fn test_sequence_source_impls() {
        let from_array = [1, 2].into_segment();
        assert_eq!(from_array.known_len(), Some(2));

        let slice: &[i32] = &[1, 2, 3];
        let from_slice = slice.into_segment();
        assert_eq!(from_slice.known_len(), Some(3));

        let deque: VecDeque<i32> = VecDeque::from(vec![7]);
        let from_deque = deque.into_segment();
        assert_eq!(from_deque.open_cursor().collect::<Vec<_>>(), vec![7]);

        let from_cursor = ExternalSource::new(0..2).into_segment();
        assert!(!from_cursor.is_restartable());
    }
}
