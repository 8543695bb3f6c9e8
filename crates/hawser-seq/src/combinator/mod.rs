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

//! # Combinator Layer
//!
//! Pure, non-mutating operations that consume a chain's traversal and produce
//! a derived stream. Each iterator here is wrapped by `LazySequence` into a
//! fresh synthetic segment, so downstream composition stays within the
//! sequence type system.
//!
//! None of these buffer more than their stated algorithm requires:
//! `Accumulate`, `DropWhile`, `TakeWhile`, and `Slice` carry O(1) state;
//! `Tail` keeps a ring buffer of its window size; `Cycle` buffers one full
//! pass only when the operand is not cheaply restartable; the selection
//! iterators materialize their pool (their algorithms need random access) and
//! carry O(r) working state on top; `GroupBy` materializes one group at a
//! time.

pub mod accumulate;
pub mod cycle;
pub mod filter;
pub mod group;
pub mod select;
pub mod slice;
pub mod tail;

pub use accumulate::Accumulate;
pub use cycle::Cycle;
pub use filter::{DropWhile, TakeWhile};
pub use group::{Group, GroupBy};
pub use select::{Combinations, CombinationsWithReplacement, Permutations};
pub use slice::Slice;
pub use tail::Tail;
