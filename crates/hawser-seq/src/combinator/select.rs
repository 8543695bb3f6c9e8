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

//! Length-r selections from a sequence: combinations (with and without
//! replacement) and permutations.
//!
//! Selections are emitted in lexicographic order of original *position*;
//! elements are treated as unique by position, not by value. The algorithms
//! need random access over the pool, so the operand traversal is materialized
//! once, on the first pull — this is the structural buffering the selection
//! problem requires, not an eager drain at construction time. Working state
//! on top of the pool is O(r).

use hawser_core::num::counting;
use hawser_core::ChainCursor;

/// Length-r subsequences in lexicographic position order.
///
/// `r` greater than the pool size yields an empty output (not an error);
/// `r == 0` yields exactly one empty selection.
pub struct Combinations<T: Clone> {
    source: Option<ChainCursor<T>>,
    pool: Vec<T>,
    indices: Vec<usize>,
    r: usize,
    first: bool,
    done: bool,
}

impl<T: Clone> Combinations<T> {
    pub fn new(source: ChainCursor<T>, r: usize) -> Self {
        Self {
            source: Some(source),
            pool: Vec::new(),
            indices: Vec::new(),
            r,
            first: true,
            done: false,
        }
    }

    fn prime(&mut self) {
        if let Some(source) = self.source.take() {
            self.pool = source.collect();
            if self.r > self.pool.len() {
                self.done = true;
            }
            self.indices = (0..self.r).collect();
        }
    }

    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.prime();
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.emit());
        }
        let n = self.pool.len();
        // Find the rightmost position that can still advance.
        let mut i = self.r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - self.r {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.emit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.source.is_some() {
            return (0, None);
        }
        (0, counting::binomial(self.pool.len(), self.r))
    }
}

impl<T: Clone> std::iter::FusedIterator for Combinations<T> {}

/// Length-r selections allowing repeated positions, in lexicographic
/// position order.
pub struct CombinationsWithReplacement<T: Clone> {
    source: Option<ChainCursor<T>>,
    pool: Vec<T>,
    indices: Vec<usize>,
    r: usize,
    first: bool,
    done: bool,
}

impl<T: Clone> CombinationsWithReplacement<T> {
    pub fn new(source: ChainCursor<T>, r: usize) -> Self {
        Self {
            source: Some(source),
            pool: Vec::new(),
            indices: Vec::new(),
            r,
            first: true,
            done: false,
        }
    }

    fn prime(&mut self) {
        if let Some(source) = self.source.take() {
            self.pool = source.collect();
            if self.pool.is_empty() && self.r > 0 {
                self.done = true;
            }
            self.indices = vec![0; self.r];
        }
    }

    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.prime();
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.emit());
        }
        let n = self.pool.len();
        // Find the rightmost position not yet at the last pool element.
        let mut i = self.r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != n - 1 {
                break;
            }
        }
        let next = self.indices[i] + 1;
        for j in i..self.r {
            self.indices[j] = next;
        }
        Some(self.emit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.source.is_some() {
            return (0, None);
        }
        (0, counting::multiset_count(self.pool.len(), self.r))
    }
}

impl<T: Clone> std::iter::FusedIterator for CombinationsWithReplacement<T> {}

/// Length-r orderings in lexicographic position order. `r` of `None` defaults
/// to the full pool length.
pub struct Permutations<T: Clone> {
    source: Option<ChainCursor<T>>,
    requested: Option<usize>,
    pool: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    r: usize,
    first: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(source: ChainCursor<T>, r: Option<usize>) -> Self {
        Self {
            source: Some(source),
            requested: r,
            pool: Vec::new(),
            indices: Vec::new(),
            cycles: Vec::new(),
            r: 0,
            first: true,
            done: false,
        }
    }

    fn prime(&mut self) {
        if let Some(source) = self.source.take() {
            self.pool = source.collect();
            let n = self.pool.len();
            self.r = self.requested.unwrap_or(n);
            if self.r > n {
                self.done = true;
                return;
            }
            self.indices = (0..n).collect();
            self.cycles = (0..self.r).map(|i| n - i).collect();
        }
    }

    fn emit(&self) -> Vec<T> {
        self.indices[..self.r]
            .iter()
            .map(|&i| self.pool[i].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.prime();
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.emit());
        }
        let n = self.pool.len();
        let mut i = self.r;
        while i > 0 {
            i -= 1;
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // Rotate indices[i..] left by one and reset the cycle.
                let moved = self.indices.remove(i);
                self.indices.push(moved);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.emit());
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.source.is_some() {
            return (0, None);
        }
        (0, counting::permutation_count(self.pool.len(), self.r))
    }
}

impl<T: Clone> std::iter::FusedIterator for Permutations<T> {}
