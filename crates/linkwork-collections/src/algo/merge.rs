// Copyright (c) 2025 Felix Kahle.
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

use crate::list::{singly::LinkedList, traits::ListView};

/// Merges two ascending lists into a new ascending list of copied values.
///
/// When the two front values compare equal, the one from `right` is taken
/// first. Both inputs are left untouched. O(m + n).
#[tracing::instrument(level = "debug", skip_all, fields(left = left.len(), right = right.len()))]
pub fn merge_sorted<L, R, T>(left: &L, right: &R) -> LinkedList<T>
where
    L: ListView<Item = T>,
    R: ListView<Item = T>,
    T: Ord + Clone,
{
    let mut result = LinkedList::with_capacity(left.len() + right.len());
    let mut lhs = left.values().peekable();
    let mut rhs = right.values().peekable();

    while let (Some(l), Some(r)) = (lhs.peek(), rhs.peek()) {
        if r <= l {
            result.append((*r).clone());
            rhs.next();
        } else {
            result.append((*l).clone());
            lhs.next();
        }
    }
    // At most one of the two still has values; its suffix is already sorted.
    result.extend(lhs.cloned());
    result.extend(rhs.cloned());

    tracing::debug!(merged = result.len(), "merge_sorted finished");
    result
}

/// Like [`merge_sorted`], but consumes both lists and moves their values
/// instead of cloning them.
pub fn merge_sorted_owned<T: Ord>(mut left: LinkedList<T>, mut right: LinkedList<T>) -> LinkedList<T> {
    let mut result = LinkedList::with_capacity(left.len() + right.len());
    loop {
        let take_right = match (left.first(), right.first()) {
            (Some(l), Some(r)) => r <= l,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let value = if take_right { right.pop() } else { left.pop() };
        if let Some(value) = value {
            result.append(value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn to_vec<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    /// Orders by `key` only, so equal keys from different lists stay
    /// distinguishable by `origin`.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        origin: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_merge_example() {
        let left: LinkedList<i32> = [1, 4, 10, 11].into_iter().collect();
        let right: LinkedList<i32> = [-1, 2, 3, 6].into_iter().collect();
        let merged = merge_sorted(&left, &right);
        assert_eq!(to_vec(&merged), vec![-1, 1, 2, 3, 4, 6, 10, 11]);
        assert_eq!(to_vec(&left), vec![1, 4, 10, 11]);
        assert_eq!(to_vec(&right), vec![-1, 2, 3, 6]);

        let owned = merge_sorted_owned(left, right);
        assert_eq!(owned, merged);
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let empty: LinkedList<i32> = LinkedList::new();
        let some: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(to_vec(&merge_sorted(&empty, &some)), vec![1, 2]);
        assert_eq!(to_vec(&merge_sorted(&some, &empty)), vec![1, 2]);
        assert!(merge_sorted(&empty, &empty).is_empty());
        assert_eq!(
            to_vec(&merge_sorted_owned(LinkedList::new(), some.clone())),
            vec![1, 2]
        );
    }

    #[test]
    fn test_ties_take_right_first() {
        let left: LinkedList<Tagged> = [Tagged { key: 1, origin: 'l' }, Tagged { key: 2, origin: 'l' }]
            .into_iter()
            .collect();
        let right: LinkedList<Tagged> = [Tagged { key: 1, origin: 'r' }, Tagged { key: 3, origin: 'r' }]
            .into_iter()
            .collect();

        let origins: String = merge_sorted(&left, &right).iter().map(|t| t.origin).collect();
        assert_eq!(origins, "rllr");

        let owned: String = merge_sorted_owned(left, right)
            .iter()
            .map(|t| t.origin)
            .collect();
        assert_eq!(owned, "rllr");
    }

    #[test]
    fn test_merge_with_duplicates_is_sorted() {
        let left: LinkedList<i32> = [1, 1, 5, 5, 9].into_iter().collect();
        let right: LinkedList<i32> = [0, 1, 5, 12].into_iter().collect();
        let merged = to_vec(&merge_sorted(&left, &right));
        let mut expected: Vec<i32> = to_vec(&left).into_iter().chain(to_vec(&right)).collect();
        expected.sort();
        assert_eq!(merged, expected);
    }
}
