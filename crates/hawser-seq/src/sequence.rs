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

//! # Lazy Restartable Sequences
//!
//! [`LazySequence`] bridges the gap between a restartable collection and a
//! single-use cursor: it wraps an arbitrary sequential source, stays
//! pull-based and memory-frugal, supports in-place structural edits, and can
//! be traversed more than once whenever its backing segments permit it.
//!
//! A sequence owns exactly one segment chain. Combinators never mutate their
//! operand; they compose a new chain around a derived stream. Mutations
//! rewrite the chain with cost proportional to the edit. Terminal queries
//! (length, membership, truthiness, indexed access) consume the traversal as
//! far as they must — which for chains backed by external cursors is an
//! observable side effect, and for unbounded sources may not terminate at
//! all. Callers bound unbounded queries structurally, with
//! [`LazySequence::length_capped`], [`LazySequence::head`], or
//! [`LazySequence::takewhile`].

use crate::combinator::{
    Accumulate, Combinations, CombinationsWithReplacement, Cycle, DropWhile, Group, GroupBy,
    Permutations, Slice, Tail, TakeWhile,
};
use hawser_core::{ChainCursor, Segment, SegmentChain, SequenceSource, SliceError};
use std::ops::{Add, AddAssign};

/// A lazily evaluated, multiply-traversable sequence.
///
/// Elements are yielded by value: owned storage hands out clones, external
/// cursors hand over their elements. `T: Clone` is therefore the baseline
/// bound; cloning the sequence itself only clones segment handles, never
/// elements.
///
/// # Restartability
///
/// A sequence built from owned storage (a `Vec`, array, or slice) can be
/// traversed any number of times. A sequence built from an external cursor —
/// or produced by a combinator, whose output is itself a synthetic single-use
/// stream — yields its elements once; re-traversal observes whatever the
/// shared cursor has left. [`LazySequence::materialize`] converts either kind
/// into owned storage in place.
///
/// # Examples
///
/// ```rust
/// # use hawser_seq::LazySequence;
///
/// let seq = LazySequence::from(vec![1, 2, 3]);
/// let sums = seq.accumulate(|a, b| a + b);
/// assert_eq!(sums.to_vec(), vec![1, 3, 6]);
///
/// // The operand is untouched and still restartable.
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// ```
pub struct LazySequence<T: Clone> {
    chain: SegmentChain<T>,
}

impl<T: Clone> LazySequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self {
            chain: SegmentChain::new(),
        }
    }

    /// Creates a sequence backed by any value offering the sequential-source
    /// capability.
    ///
    /// When the source is an [`hawser_core::ExternalSource`], the sequence
    /// admits the shared-cursor aliasing hazard by construction: consumption
    /// through either handle is visible to the other.
    #[inline]
    pub fn from_source(source: impl SequenceSource<T>) -> Self {
        Self {
            chain: SegmentChain::from_segment(source.into_segment()),
        }
    }

    /// Opens a traversal cursor over the sequence's current contents.
    ///
    /// Traversal order is construction order; for a chain free of external
    /// aliasing interference, repeated traversals observe the same order.
    #[inline]
    pub fn iter(&self) -> ChainCursor<T> {
        self.chain.cursor()
    }

    /// Collects one full traversal into a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns `true` if every backing segment can be re-traversed without
    /// side effects.
    #[inline]
    pub fn is_restartable(&self) -> bool {
        self.chain.is_restartable()
    }

    /// Drains the sequence into a single owned segment, in place.
    ///
    /// Afterwards the sequence is restartable and private: the materialized
    /// copy shares no progress with any external cursor, which also makes it
    /// the right thing to build before handing contents to another thread.
    pub fn materialize(&mut self) {
        let items: Vec<T> = self.iter().collect();
        self.chain.replace(Segment::owned(items));
    }

    // ------------------------------------------------------------------
    // Mutation layer
    // ------------------------------------------------------------------

    /// Appends `item` to the end of the sequence. O(1).
    #[inline]
    pub fn append(&mut self, item: T) {
        self.chain.push_back_item(item);
    }

    /// Prepends `item` to the start of the sequence. O(1).
    #[inline]
    pub fn prepend(&mut self, item: T) {
        self.chain.push_front_item(item);
    }

    /// Inserts `item` at position `index`, splitting whichever segment spans
    /// it. Cost is O(index into that segment), not O(total length). An index
    /// past the end appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let mut seq = LazySequence::from(vec![10, 20, 30]);
    /// seq.insert(1, 99);
    /// assert_eq!(seq.to_vec(), vec![10, 99, 20, 30]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) {
        self.chain.insert_item(index, item);
    }

    /// Replaces the sequence's entire contents with a new source.
    ///
    /// Like construction, this re-admits the aliasing hazard when the new
    /// source is a single-use cursor.
    #[inline]
    pub fn update(&mut self, source: impl SequenceSource<T>) {
        self.chain.replace(source.into_segment());
    }

    /// Removes the first `n` elements (bulk skip). Skipping past the end
    /// leaves the sequence empty.
    #[inline]
    pub fn consume(&mut self, n: usize) {
        self.chain.skip_items(n);
    }

    /// Removes every element, pulling external cursors dry so shared handles
    /// observe the drain.
    #[inline]
    pub fn consume_all(&mut self) {
        self.chain.skip_all();
    }

    // ------------------------------------------------------------------
    // Terminal / query layer
    // ------------------------------------------------------------------

    /// Counts the elements with a full forward scan. O(n); does not terminate
    /// on an unbounded sequence — cap with [`LazySequence::length_capped`].
    #[inline]
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Counts elements, stopping after `cap`. A result of `cap` means "at
    /// least `cap`", not the true length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 2, 3]);
    /// assert_eq!(seq.length_capped(2), 2);
    /// assert_eq!(seq.length_capped(10), 3);
    /// ```
    #[inline]
    pub fn length_capped(&self, cap: usize) -> usize {
        self.iter().take(cap).count()
    }

    /// Returns `true` if the sequence holds at least one element.
    ///
    /// Pulls at most one element; if it came from an external segment it is
    /// pushed back as an owned singleton at the front of the chain, so
    /// peeking never loses an element and a later full traversal is
    /// unaffected.
    #[inline]
    pub fn is_truthy(&mut self) -> bool {
        self.chain.probe_front()
    }

    /// Forward scan for `value`, with early exit on the first equal element.
    ///
    /// Never terminates if `value` is absent and the sequence is unbounded.
    /// Elements read from external segments during the scan are consumed.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    /// Returns the element at `index`, or `None` past the end.
    #[inline]
    pub fn get_at(&self, index: usize) -> Option<T> {
        self.iter().nth(index)
    }

    /// Returns the element at `index`, or `default` past the end.
    /// Out-of-range access is non-fatal by design.
    #[inline]
    pub fn get_at_or(&self, index: usize, default: T) -> T {
        self.get_at(index).unwrap_or(default)
    }

    // ------------------------------------------------------------------
    // Operator surface
    // ------------------------------------------------------------------

    /// Returns a new sequence whose chain references this sequence's segments
    /// followed by `other`'s. Neither operand is modified or drained.
    #[inline]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            chain: self.chain.concat(&other.chain),
        }
    }

    /// Appends handles to `other`'s segments in place. Cost is proportional
    /// to the number of segments, never a drain of their contents.
    #[inline]
    pub fn extend_with(&mut self, other: &Self) {
        self.chain.extend_from(&other.chain);
    }
}

impl<T: Clone + 'static> LazySequence<T> {
    /// Creates a single-pass sequence from an arbitrary iterator.
    ///
    /// The stream is wrapped as an external segment: it obeys the same
    /// single-use contract as a caller-supplied cursor. Use
    /// [`LazySequence::materialize`] or a materializing constructor
    /// (`collect`, `From<Vec<T>>`) for a restartable sequence.
    #[inline]
    pub fn from_stream<I>(stream: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            chain: SegmentChain::from_segment(Segment::derived(stream)),
        }
    }

    // ------------------------------------------------------------------
    // Combinator layer
    // ------------------------------------------------------------------

    /// Emits running reductions: the first output is the first input, each
    /// later output is `combine(previous_output, next_input)`. Output length
    /// equals input length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 2, 3]);
    /// assert_eq!(seq.accumulate(|a, b| a + b).to_vec(), vec![1, 3, 6]);
    /// ```
    pub fn accumulate<F>(&self, combine: F) -> Self
    where
        F: FnMut(T, T) -> T + 'static,
    {
        Self::from_stream(Accumulate::new(self.iter(), combine))
    }

    /// Emits running reductions seeded with `initial`: the output is prefixed
    /// by `initial` and is one element longer than the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 2, 3]);
    /// let out = seq.accumulate_init(10, |a, b| a + b);
    /// assert_eq!(out.to_vec(), vec![10, 11, 13, 16]);
    /// ```
    pub fn accumulate_init<F>(&self, initial: T, combine: F) -> Self
    where
        F: FnMut(T, T) -> T + 'static,
    {
        Self::from_stream(Accumulate::with_initial(self.iter(), combine, initial))
    }

    /// Length-`r` subsequences in lexicographic position order. `r` larger
    /// than the sequence length yields an empty result, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 2, 3]);
    /// let pairs = seq.combinations(2);
    /// assert_eq!(pairs.to_vec(), vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
    /// ```
    pub fn combinations(&self, r: usize) -> LazySequence<Vec<T>> {
        LazySequence::from_stream(Combinations::new(self.iter(), r))
    }

    /// Length-`r` selections allowing repeated positions, in lexicographic
    /// position order.
    pub fn combinations_with_replacement(&self, r: usize) -> LazySequence<Vec<T>> {
        LazySequence::from_stream(CombinationsWithReplacement::new(self.iter(), r))
    }

    /// Length-`r` orderings in lexicographic position order; `None` means
    /// full length.
    pub fn permutations(&self, r: Option<usize>) -> LazySequence<Vec<T>> {
        LazySequence::from_stream(Permutations::new(self.iter(), r))
    }

    /// Replays the full sequence end-to-end `n` times (`None` = unbounded).
    ///
    /// A restartable sequence is replayed with a fresh cursor per pass and no
    /// auxiliary storage. A sequence backed by an external cursor buffers one
    /// full pass — re-traversal would otherwise alias the drained cursor and
    /// replay nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec!["A", "B", "C"]);
    /// let cycled = seq.cycle(Some(4));
    /// assert_eq!(cycled.length(), 12);
    /// ```
    pub fn cycle(&self, n: Option<usize>) -> Self {
        Self::from_stream(Cycle::new(&self.chain, n))
    }

    /// Suppresses elements while `predicate` holds, then yields everything
    /// else unconditionally; the predicate is not re-checked after it first
    /// turns false.
    pub fn dropwhile<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::from_stream(DropWhile::new(self.iter(), predicate))
    }

    /// Yields elements while `predicate` holds; stops permanently at the
    /// first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 4, 6, 3, 1]);
    /// assert_eq!(seq.takewhile(|x| *x < 5).to_vec(), vec![1, 4]);
    /// ```
    pub fn takewhile<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::from_stream(TakeWhile::new(self.iter(), predicate))
    }

    /// Skips `start` elements, then yields every `step`-th element until
    /// `stop` (exclusive) or exhaustion.
    ///
    /// Validation is eager: a zero step is rejected here, at the call, never
    /// deferred into traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if `step == 0`.
    pub fn get_slice(
        &self,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> Result<Self, SliceError> {
        if step == 0 {
            return Err(SliceError::ZeroStep);
        }
        Ok(Self::from_stream(Slice::new(self.iter(), start, stop, step)))
    }

    /// The first `n` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(seq.head(2).to_vec(), vec![1, 2]);
    /// ```
    pub fn head(&self, n: usize) -> Self {
        Self::from_stream(Slice::new(self.iter(), 0, Some(n), 1))
    }

    /// The last `n` elements observed. Requires one full pass (performed on
    /// the first pull) and an O(n) ring buffer; `n == 0` yields an empty
    /// sequence.
    pub fn tail(&self, n: usize) -> Self {
        Self::from_stream(Tail::new(self.iter(), n))
    }

    /// Partitions the sequence into maximal runs of equal key.
    ///
    /// The input is assumed pre-sorted by the key for meaningful grouping; no
    /// resorting is performed. Each group's members are materialized before
    /// the next group is produced, so an unconsumed group is never corrupted
    /// by advancing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_seq::LazySequence;
    ///
    /// let seq = LazySequence::from(vec![1, 1, 2, 2, 2, 3]);
    /// let groups = seq.groupby(|x| *x);
    /// let sizes: Vec<usize> = groups.iter().map(|g| g.members.length()).collect();
    /// assert_eq!(sizes, vec![2, 3, 1]);
    /// ```
    pub fn groupby<K, F>(&self, key: F) -> LazySequence<Group<K, T>>
    where
        K: PartialEq + Clone + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        LazySequence::from_stream(GroupBy::new(self.iter(), key))
    }
}

impl<T: Clone> Clone for LazySequence<T> {
    /// Composes a new chain referencing the same segments; element storage is
    /// never copied. Clones of a sequence backed by an external cursor share
    /// that cursor's progress.
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<T: Clone> Default for LazySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> From<Vec<T>> for LazySequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_source(items)
    }
}

impl<T: Clone> FromIterator<T> for LazySequence<T> {
    /// Materializing collect: the iterator is drained eagerly into owned
    /// storage, producing a restartable sequence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_source(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Extend<T> for LazySequence<T> {
    /// Appends the items as a single materialized owned segment.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        if !items.is_empty() {
            self.chain.push_segment(Segment::owned(items));
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a LazySequence<T> {
    type Item = T;
    type IntoIter = ChainCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Add<&LazySequence<T>> for &LazySequence<T> {
    type Output = LazySequence<T>;

    /// Concatenation: a new sequence referencing both operands' segments.
    fn add(self, rhs: &LazySequence<T>) -> LazySequence<T> {
        self.concat(rhs)
    }
}

impl<T: Clone> AddAssign<&LazySequence<T>> for LazySequence<T> {
    /// In-place extension by segment handles.
    fn add_assign(&mut self, rhs: &LazySequence<T>) {
        self.extend_with(rhs);
    }
}

impl<T: Clone> std::fmt::Debug for LazySequence<T> {
    /// Deliberately shallow: printing contents would traverse the sequence,
    /// which is an observable side effect for external segments.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LazySequence {{ segments: {}, restartable: {} }}",
            self.chain.segments().len(),
            self.chain.is_restartable()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::ExternalSource;

    #[test]
    fn test_empty_sequence() {
        let mut seq: LazySequence<i32> = LazySequence::new();
        assert_eq!(seq.length(), 0);
        assert!(!seq.is_truthy());
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_owned_sequence_is_multiply_traversable() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.length(), 3);
    }

    #[test]
    fn test_stream_sequence_is_single_pass() {
        let seq = LazySequence::from_stream(0..3);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_external_source_aliasing_is_observable() {
        let handle = ExternalSource::new(vec![1, 2, 3, 4].into_iter());
        let seq = LazySequence::from_source(handle.clone());

        // Outside code consumes through the original handle.
        assert_eq!(handle.pull(), Some(1));
        // The wrapper observes the drain...
        assert_eq!(seq.get_at(0), Some(2));
        // ...and the wrapper's reads are visible outside.
        assert_eq!(handle.pull(), Some(3));
    }

    #[test]
    fn test_materialize_produces_private_restartable_copy() {
        let mut seq = LazySequence::from_stream(0..4);
        assert!(!seq.is_restartable());

        seq.materialize();
        assert!(seq.is_restartable());
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_append_prepend() {
        let mut seq = LazySequence::from(vec![2]);
        seq.append(3);
        seq.prepend(1);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_mid_sequence() {
        let mut seq = LazySequence::from(vec![10, 20, 30]);
        seq.insert(1, 99);
        assert_eq!(seq.to_vec(), vec![10, 99, 20, 30]);
    }

    #[test]
    fn test_insert_into_lazy_stream_stays_lazy_past_split() {
        let mut seq = LazySequence::from_stream(vec![10, 20, 30].into_iter());
        seq.insert(1, 99);
        assert!(!seq.is_restartable());
        assert_eq!(seq.to_vec(), vec![10, 99, 20, 30]);
    }

    #[test]
    fn test_update_replaces_contents() {
        let mut seq = LazySequence::from(vec![1, 2, 3]);
        seq.update(vec![9, 8]);
        assert_eq!(seq.to_vec(), vec![9, 8]);
    }

    #[test]
    fn test_consume_skips_prefix() {
        let mut seq = LazySequence::from(vec![1, 2, 3, 4, 5]);
        seq.consume(2);
        assert_eq!(seq.to_vec(), vec![3, 4, 5]);

        seq.consume_all();
        assert_eq!(seq.length(), 0);
    }

    #[test]
    fn test_truthy_does_not_perturb_traversal_owned() {
        let mut seq = LazySequence::from(vec![1, 2, 3]);
        let before = seq.to_vec();
        assert!(seq.is_truthy());
        assert_eq!(seq.to_vec(), before);
    }

    #[test]
    fn test_truthy_does_not_perturb_traversal_external() {
        let mut seq = LazySequence::from_stream(vec![1, 2, 3].into_iter());
        assert!(seq.is_truthy());
        // The peeked element was pushed back; the single pass is intact.
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_truthy_empty() {
        let mut seq = LazySequence::from_stream(std::iter::empty::<i32>());
        assert!(!seq.is_truthy());
    }

    #[test]
    fn test_contains_early_exit() {
        let handle = ExternalSource::new(1..=100);
        let seq = LazySequence::from_source(handle.clone());
        assert!(seq.contains(&3));
        // The scan stopped at the match; the remainder is still there.
        assert_eq!(handle.pull(), Some(4));
    }

    #[test]
    fn test_contains_absent_value() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        assert!(!seq.contains(&7));
    }

    #[test]
    fn test_get_at_and_default() {
        let seq = LazySequence::from(vec![10, 20, 30]);
        assert_eq!(seq.get_at(1), Some(20));
        assert_eq!(seq.get_at(5), None);
        assert_eq!(seq.get_at_or(5, -1), -1);
        assert_eq!(seq.get_at_or(0, -1), 10);
    }

    #[test]
    fn test_length_capped_reports_at_least() {
        let unbounded = LazySequence::from_stream(0..);
        assert_eq!(unbounded.length_capped(10), 10);

        let short = LazySequence::from(vec![1, 2]);
        assert_eq!(short.length_capped(10), 2);
    }

    #[test]
    fn test_concat_is_non_mutating() {
        let a = LazySequence::from(vec![1, 2]);
        let b = LazySequence::from(vec![3]);
        let joined = &a + &b;

        assert_eq!(joined.to_vec(), vec![1, 2, 3]);
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(b.to_vec(), vec![3]);
    }

    #[test]
    fn test_extend_in_place() {
        let mut a = LazySequence::from(vec![1, 2]);
        let b = LazySequence::from(vec![3, 4]);
        a += &b;
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
        // The right operand is referenced, not drained.
        assert_eq!(b.to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_extend_with_plain_items() {
        let mut seq = LazySequence::from(vec![1]);
        seq.extend(vec![2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_collect_materializes() {
        let seq: LazySequence<i32> = (0..4).collect();
        assert!(seq.is_restartable());
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cycle_first_pass_preserves_order() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        let cycled = seq.cycle(Some(3));
        let out = cycled.to_vec();
        assert_eq!(out.len(), 9);
        assert_eq!(&out[..3], &seq.to_vec()[..]);
    }

    #[test]
    fn test_cycle_of_concatenation() {
        let a = LazySequence::from(vec![1]);
        let b = LazySequence::from(vec![2]);
        let cycled = (&a + &b).cycle(Some(2));
        assert_eq!(cycled.to_vec(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_get_slice_zero_step_is_rejected_eagerly() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        assert_eq!(
            seq.get_slice(0, None, 0).err(),
            Some(SliceError::ZeroStep)
        );
    }

    #[test]
    fn test_get_slice_and_head() {
        let seq: LazySequence<i32> = (0..10).collect();
        assert_eq!(
            seq.get_slice(2, Some(8), 2).unwrap().to_vec(),
            vec![2, 4, 6]
        );
        assert_eq!(seq.head(3).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_tail_of_sequence() {
        let seq: LazySequence<i32> = (0..10).collect();
        assert_eq!(seq.tail(3).to_vec(), vec![7, 8, 9]);
        assert_eq!(seq.tail(0).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_combinator_chaining_stays_in_type_system() {
        let seq: LazySequence<i32> = (1..=6).collect();
        let out = seq
            .dropwhile(|x| *x < 3)
            .takewhile(|x| *x < 6)
            .accumulate(|a, b| a + b);
        assert_eq!(out.to_vec(), vec![3, 7, 12]);
    }

    #[test]
    fn test_groupby_reassembles_sorted_input() {
        let items = vec![1, 1, 2, 2, 2, 3];
        let seq = LazySequence::from(items.clone());
        let mut reassembled = Vec::new();
        for group in seq.groupby(|x| *x).iter() {
            reassembled.extend(group.members.to_vec());
        }
        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_clone_shares_segments_without_copying() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        let alias = seq.clone();
        assert_eq!(alias.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_clone_of_stream_shares_progress() {
        let seq = LazySequence::from_stream(0..4);
        let alias = seq.clone();
        assert_eq!(seq.get_at(0), Some(0));
        // The alias references the same single-use cursor.
        assert_eq!(alias.get_at(0), Some(1));
    }

    #[test]
    fn test_mutation_does_not_affect_derived_sequences_storage() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        let derived = seq.clone();

        let mut seq = seq;
        seq.insert(0, 0);
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
        // Clone-on-write: the derived chain still sees the original storage.
        assert_eq!(derived.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_random_edits_match_vec_oracle() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x4861_7773);
        let mut seq: LazySequence<i32> = LazySequence::new();
        let mut oracle: Vec<i32> = Vec::new();

        for step in 0..200 {
            match rng.gen_range(0..4) {
                0 => {
                    seq.append(step);
                    oracle.push(step);
                }
                1 => {
                    seq.prepend(step);
                    oracle.insert(0, step);
                }
                2 => {
                    let index = rng.gen_range(0..=oracle.len());
                    seq.insert(index, step);
                    oracle.insert(index, step);
                }
                _ => {
                    let n = rng.gen_range(0..3);
                    seq.consume(n);
                    oracle.drain(..n.min(oracle.len()));
                }
            }
        }
        assert_eq!(seq.to_vec(), oracle);
    }

    #[test]
    fn test_random_slices_match_step_by_oracle() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<i32> = (0..64).collect();
        let seq = LazySequence::from(items.clone());

        for _ in 0..50 {
            let start = rng.gen_range(0..70usize);
            let stop = rng.gen_range(0..70usize);
            let step = rng.gen_range(1..5usize);

            let got = seq.get_slice(start, Some(stop), step).unwrap().to_vec();
            let want: Vec<i32> = items
                .iter()
                .copied()
                .take(stop)
                .skip(start)
                .step_by(step)
                .collect();
            assert_eq!(got, want, "start={start} stop={stop} step={step}");
        }
    }

    #[test]
    fn test_debug_is_shallow() {
        let seq = LazySequence::from(vec![1, 2, 3]);
        let rendered = format!("{:?}", seq);
        assert!(rendered.contains("segments: 1"));
        assert!(rendered.contains("restartable: true"));
    }
}
