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

//! # Hawser Core
//!
//! Foundational primitives for the Hawser lazy sequence library: segment
//! sources, segment chains, traversal cursors, argument-validation errors,
//! and integer counting helpers.
//!
//! ## Modules
//!
//! - `source`: The tagged [`source::Segment`] model separating cheaply
//!   restartable owned storage from caller-supplied single-use cursors
//!   ([`source::ExternalSource`]), plus the [`source::SequenceSource`]
//!   capability trait checked at construction time.
//! - `chain`: Ordered segment composition ([`chain::SegmentChain`]) with the
//!   single traversal contract ([`chain::ChainCursor`]) every higher layer is
//!   built on, and structural-edit primitives whose cost is proportional to
//!   the edit, not the sequence.
//! - `error`: Eagerly raised argument-validation errors.
//! - `num`: Overflow-checked selection counting (`binomial`,
//!   `permutation_count`, `factorial`) for combinator size hints and test
//!   oracles.
//!
//! ## Aliasing model
//!
//! The defining hazard this crate makes explicit at the type level: an
//! external source is its own sole cursor. Re-traversing it aliases shared
//! progress, and consumption by code outside the library is observable
//! through any wrapper that references it. Owned segments carry none of
//! these hazards and are restartable for free.
//!
//! Everything here is single-threaded by construction: shared state uses
//! `Rc`/`RefCell`, so the types are deliberately `!Send` and `!Sync`.

pub mod chain;
pub mod error;
pub mod num;
pub mod source;

pub use chain::{ChainCursor, SegmentChain};
pub use error::SliceError;
pub use source::{ExternalSource, Segment, SequenceSource};
