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

//! # Hawser Sequences
//!
//! The user-facing sequence abstraction of the Hawser project:
//! [`LazySequence`], a lazily evaluated, structurally editable, multiply
//! traversable sequence, together with the combinator adaptors it composes.
//!
//! ## Modules
//!
//! - [`sequence`]: the [`LazySequence`] type — construction, combinators,
//!   mutation, terminal queries, and the operator surface.
//! - [`combinator`]: the lazy adaptors behind the combinator methods
//!   (accumulation, selection orders, cycling, predicate windows, slicing,
//!   tail windows, key grouping).
//!
//! ## Motivation
//!
//! Iterator pipelines in Rust are single-use values: once a chain of adaptors
//! is consumed it is gone, and splicing an element into the middle of one is
//! not expressible at all. [`LazySequence`] keeps the pull-based economy of
//! an iterator pipeline while adding the affordances of a collection —
//! repeated traversal where the backing storage permits it, O(edit) in-place
//! structural changes, and queries that consume no more of the input than
//! they must.
//!
//! ## Examples
//!
//! ```rust
//! use hawser_seq::LazySequence;
//!
//! let seq = LazySequence::from(vec![1, 2, 3, 4, 5]);
//!
//! let windowed = seq.dropwhile(|x| *x < 2).takewhile(|x| *x < 5);
//! assert_eq!(windowed.to_vec(), vec![2, 3, 4]);
//!
//! // The source is untouched and still restartable.
//! assert_eq!(seq.length(), 5);
//! ```

pub mod combinator;
pub mod sequence;

pub use combinator::Group;
pub use hawser_core::{ChainCursor, ExternalSource, Segment, SegmentChain, SequenceSource, SliceError};
pub use sequence::LazySequence;
