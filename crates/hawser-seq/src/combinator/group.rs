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

use crate::sequence::LazySequence;
use hawser_core::ChainCursor;

/// A maximal consecutive run of elements sharing an equal key.
///
/// The member sequence is backed by owned storage, materialized before the
/// next group is produced, so advancing the grouping cannot retroactively
/// truncate a group that has not been consumed yet.
#[derive(Clone)]
pub struct Group<K, T: Clone> {
    /// The key shared by every member of the run.
    pub key: K,
    /// The members of the run, in input order.
    pub members: LazySequence<T>,
}

impl<K: std::fmt::Debug, T: Clone> std::fmt::Debug for Group<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("key", &self.key)
            .field("members", &self.members)
            .finish()
    }
}

/// Partitions a traversal into maximal runs of equal key.
///
/// The input is assumed pre-sorted by the key for meaningful grouping; no
/// resorting is performed, so an unsorted input simply produces one run per
/// consecutive stretch. One element of lookahead is held between groups.
pub struct GroupBy<T: Clone, K, F> {
    source: ChainCursor<T>,
    key: F,
    lookahead: Option<(K, T)>,
}

impl<T: Clone, K, F> GroupBy<T, K, F>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    pub fn new(source: ChainCursor<T>, key: F) -> Self {
        Self {
            source,
            key,
            lookahead: None,
        }
    }
}

impl<T: Clone, K, F> Iterator for GroupBy<T, K, F>
where
    K: PartialEq + Clone,
    F: FnMut(&T) -> K,
{
    type Item = Group<K, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (group_key, first) = match self.lookahead.take() {
            Some(pending) => pending,
            None => {
                let item = self.source.next()?;
                let key = (self.key)(&item);
                (key, item)
            }
        };

        let mut members = vec![first];
        for item in self.source.by_ref() {
            let key = (self.key)(&item);
            if key == group_key {
                members.push(item);
            } else {
                self.lookahead = Some((key, item));
                break;
            }
        }

        Some(Group {
            key: group_key,
            members: LazySequence::from(members),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::{Segment, SegmentChain};

    fn cursor_of(items: Vec<i32>) -> ChainCursor<i32> {
        SegmentChain::from_segment(Segment::owned(items)).cursor()
    }

    #[test]
    fn test_runs_of_equal_key() {
        let groups: Vec<_> = GroupBy::new(cursor_of(vec![1, 1, 2, 2, 2, 3]), |x| *x).collect();

        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![1, 2, 3]);

        let sizes: Vec<_> = groups.iter().map(|g| g.members.length()).collect();
        assert_eq!(sizes, vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert_eq!(GroupBy::new(cursor_of(vec![]), |x| *x).count(), 0);
    }

    #[test]
    fn test_derived_key() {
        let groups: Vec<_> = GroupBy::new(cursor_of(vec![1, 3, 5, 2, 4, 7]), |x| x % 2).collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].members.to_vec(), vec![1, 3, 5]);
        assert_eq!(groups[1].members.to_vec(), vec![2, 4]);
        assert_eq!(groups[2].members.to_vec(), vec![7]);
    }

    #[test]
    fn test_concatenated_groups_reproduce_input_order() {
        let items = vec![1, 1, 2, 2, 3, 3, 3];
        let mut reassembled = Vec::new();
        for group in GroupBy::new(cursor_of(items.clone()), |x| *x) {
            reassembled.extend(group.members.to_vec());
        }
        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_earlier_group_survives_advancing() {
        // Each group is materialized before the next one is produced.
        let mut groups = GroupBy::new(cursor_of(vec![1, 1, 2]), |x| *x);
        let first = groups.next().unwrap();
        let _second = groups.next().unwrap();
        assert_eq!(first.members.to_vec(), vec![1, 1]);
    }

    #[test]
    fn test_unsorted_input_produces_one_run_per_stretch() {
        let groups: Vec<_> = GroupBy::new(cursor_of(vec![1, 2, 1]), |x| *x).collect();
        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![1, 2, 1]);
    }
}
