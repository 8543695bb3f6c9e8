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

//! # Segment Chains
//!
//! A [`SegmentChain`] is the ordered composition of segments that forms one
//! sequence's full logical contents. Traversal visits segments left to right;
//! the chain's logical length is the sum of its segments' eventually observed
//! lengths, which is only knowable up front when every segment is owned.
//!
//! Structural edits (append, prepend, insert-at, bulk skip, wholesale
//! replacement) live here so that their cost stays proportional to the edit
//! rather than to the total sequence length: a chain is never materialized
//! wholesale just to splice one element into it.
//!
//! [`ChainCursor`] is the single traversal contract every higher layer is
//! built on. It owns cheap handles to the chain's segments, so it remains
//! valid independently of the chain it was opened from; a structural edit made
//! after a cursor was opened is simply not visible to that cursor's remaining
//! segment handles.

use crate::source::{Segment, SegmentCursor};
use smallvec::SmallVec;
use std::rc::Rc;

/// Inline capacity for the segment list. Most chains hold a handful of
/// segments; edits beyond that spill to the heap.
const INLINE_SEGMENTS: usize = 4;

/// An ordered list of segments forming one sequence's full contents.
pub struct SegmentChain<T> {
    segments: SmallVec<[Segment<T>; INLINE_SEGMENTS]>,
}

impl<T> SegmentChain<T> {
    /// Creates an empty chain.
    #[inline]
    pub fn new() -> Self {
        Self {
            segments: SmallVec::new(),
        }
    }

    /// Creates a chain holding a single segment.
    #[inline]
    pub fn from_segment(segment: Segment<T>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(segment);
        Self { segments }
    }

    /// Returns the segments of this chain, left to right.
    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Returns `true` if every segment can be re-traversed without side
    /// effects. A chain containing any external segment is not restartable:
    /// re-traversing it would alias and drain the shared cursor.
    #[inline]
    pub fn is_restartable(&self) -> bool {
        self.segments.iter().all(Segment::is_restartable)
    }

    /// Returns the chain's logical length, when knowable without traversal.
    #[inline]
    pub fn known_len(&self) -> Option<usize> {
        self.segments.iter().map(Segment::known_len).sum()
    }

    /// Appends a segment to the end of the chain.
    #[inline]
    pub fn push_segment(&mut self, segment: Segment<T>) {
        self.segments.push(segment);
    }

    /// Prepends a segment to the front of the chain.
    #[inline]
    pub fn push_front_segment(&mut self, segment: Segment<T>) {
        self.segments.insert(0, segment);
    }

    /// Replaces the entire chain with a single new segment.
    ///
    /// This re-admits the external aliasing hazard when the new segment wraps
    /// a single-use cursor, mirroring the construction contract.
    #[inline]
    pub fn replace(&mut self, segment: Segment<T>) {
        self.segments.clear();
        self.segments.push(segment);
    }

    /// Appends handles to all of `other`'s segments. Cost is proportional to
    /// the number of segments, never a drain of their contents.
    pub fn extend_from(&mut self, other: &Self) {
        self.segments.extend(other.segments.iter().cloned());
    }

    /// Returns a new chain referencing this chain's segments followed by
    /// `other`'s. Neither operand is modified; if either holds an external
    /// segment that is drained elsewhere before the concatenation is
    /// traversed, the observed result reflects that drain.
    pub fn concat(&self, other: &Self) -> Self {
        let mut segments = SmallVec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Appends a new single-element owned segment. O(1).
    #[inline]
    pub fn push_back_item(&mut self, item: T) {
        self.segments.push(Segment::singleton(item));
    }

    /// Prepends a new single-element owned segment. O(1) in elements.
    #[inline]
    pub fn push_front_item(&mut self, item: T) {
        self.segments.insert(0, Segment::singleton(item));
    }

    /// Peeks at the front of the chain without losing an element.
    ///
    /// Pulls at most one element. If it came from an external segment, the
    /// element is pushed back as a synthetic single-element owned segment in
    /// front of that segment, so a later full traversal is unaffected.
    /// Returns `true` if the chain has at least one element.
    pub fn probe_front(&mut self) -> bool {
        for i in 0..self.segments.len() {
            match &self.segments[i] {
                Segment::Owned(data) => {
                    if !data.is_empty() {
                        return true;
                    }
                }
                Segment::External(source) => {
                    if let Some(item) = source.pull() {
                        self.segments.insert(i, Segment::singleton(item));
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl<T: Clone> SegmentChain<T> {
    /// Opens a traversal cursor over the chain's current segments.
    #[inline]
    pub fn cursor(&self) -> ChainCursor<T> {
        ChainCursor::new(self)
    }

    /// Inserts `item` so that it is the `index`-th element of a future full
    /// traversal.
    ///
    /// The segment spanning `index` is split. Owned segments are edited in
    /// place with clone-on-write storage. An external segment is drained up to
    /// the split point; the drained prefix plus the new item becomes a new
    /// owned segment, and the already-advanced external cursor remains as the
    /// continuation. Cost is O(index into that segment), not O(total length).
    ///
    /// An index past the end of the chain clamps to an append.
    pub fn insert_item(&mut self, index: usize, item: T) {
        let mut offset = 0usize;
        let mut i = 0usize;
        while i < self.segments.len() {
            let local = index - offset;
            match &mut self.segments[i] {
                Segment::Owned(data) => {
                    let len = data.len();
                    if local <= len {
                        Rc::make_mut(data).insert(local, item);
                        return;
                    }
                    offset += len;
                }
                Segment::External(source) => {
                    let mut prefix: Vec<T> = Vec::with_capacity(local.min(16));
                    while prefix.len() < local {
                        match source.pull() {
                            Some(pulled) => prefix.push(pulled),
                            None => break,
                        }
                    }
                    if prefix.len() == local {
                        prefix.push(item);
                        self.segments.insert(i, Segment::owned(prefix));
                        return;
                    }
                    // The cursor ran dry before the split point. Preserve the
                    // drained elements and keep scanning to the right.
                    offset += prefix.len();
                    self.segments[i] = Segment::owned(prefix);
                }
            }
            i += 1;
        }
        self.segments.push(Segment::singleton(item));
    }

    /// Removes the first `n` elements from the chain's logical contents.
    ///
    /// Owned segments are trimmed with clone-on-write storage; external
    /// segments are pulled dry as needed. Removing more elements than exist
    /// leaves the chain empty.
    pub fn skip_items(&mut self, mut n: usize) {
        while n > 0 && !self.segments.is_empty() {
            match &mut self.segments[0] {
                Segment::Owned(data) => {
                    let len = data.len();
                    if n >= len {
                        self.segments.remove(0);
                        n -= len;
                    } else {
                        Rc::make_mut(data).drain(..n);
                        return;
                    }
                }
                Segment::External(source) => {
                    while n > 0 {
                        if source.pull().is_none() {
                            break;
                        }
                        n -= 1;
                    }
                    if n > 0 {
                        // Exhausted before the skip completed.
                        self.segments.remove(0);
                    } else {
                        return;
                    }
                }
            }
        }
    }

    /// Removes every element from the chain.
    ///
    /// External segments are pulled dry first, so shared handles held by
    /// outside code observe the drain (the same side effect a full traversal
    /// would have).
    pub fn skip_all(&mut self) {
        for segment in self.segments.iter() {
            if let Segment::External(source) = segment {
                while source.pull().is_some() {}
            }
        }
        self.segments.clear();
    }
}

impl<T> Clone for SegmentChain<T> {
    /// Composes a new chain referencing the same segments. Owned storage is
    /// shared by reference count; external segments keep aliasing the same
    /// cursor.
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.iter().cloned().collect(),
        }
    }
}

impl<T> Default for SegmentChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SegmentChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()
    }
}

/// An owning traversal cursor over a chain: the concatenation of each
/// segment's stream, left to right.
///
/// Yields elements by value, cloning them out of owned storage and pulling
/// them (destructively, observably) from external segments.
pub struct ChainCursor<T: Clone> {
    segments: smallvec::IntoIter<[Segment<T>; INLINE_SEGMENTS]>,
    current: Option<SegmentCursor<T>>,
}

impl<T: Clone> ChainCursor<T> {
    fn new(chain: &SegmentChain<T>) -> Self {
        let segments: SmallVec<[Segment<T>; INLINE_SEGMENTS]> =
            chain.segments.iter().cloned().collect();
        Self {
            segments: segments.into_iter(),
            current: None,
        }
    }
}

impl<T: Clone> Iterator for ChainCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cursor) = &mut self.current {
                if let Some(item) = cursor.next() {
                    return Some(item);
                }
            }
            self.current = Some(self.segments.next()?.open_cursor());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = self
            .current
            .as_ref()
            .map_or((0, Some(0)), SegmentCursor::size_hint);
        let mut lower = current.0;
        let mut upper = current.1;
        for segment in self.segments.as_slice() {
            match segment.known_len() {
                Some(len) => {
                    lower += len;
                    upper = upper.map(|u| u + len);
                }
                None => upper = None,
            }
        }
        (lower, upper)
    }
}

impl<T: Clone> std::iter::FusedIterator for ChainCursor<T> {}
