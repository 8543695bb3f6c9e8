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

//! Error types for argument validation.
//!
//! Preconditions are validated eagerly at the call that violates them, never
//! deferred into lazy traversal. Most of the invalid-argument space of the
//! sequence API is unrepresentable in the first place: sizes and indices are
//! `usize`, so negative selection sizes and negative slice bounds are compile
//! errors, and a source without the sequential-source capability fails the
//! `SequenceSource` trait bound at the construction site. What remains is
//! enumerated here.

/// The error type for slice argument validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// The step of a slice must be at least 1.
    ZeroStep,
}

impl std::fmt::Display for SliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceError::ZeroStep => write!(f, "Slice step must be at least 1"),
        }
    }
}

impl std::error::Error for SliceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SliceError::ZeroStep.to_string(), "Slice step must be at least 1");
    }
}
