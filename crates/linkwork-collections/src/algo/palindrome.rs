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

use crate::{
    algo::runner::first_half_tail,
    list::{key::NodeKey, singly::LinkedList, traits::ListView},
};

/// Checks whether the values of `list` read the same in both directions,
/// using O(1) extra space.
///
/// The second half is reversed in place, compared against the first half and
/// reversed back before returning, so the list is observably unchanged once
/// the call completes. The empty list is a palindrome.
#[tracing::instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn is_palindrome<T: PartialEq>(list: &mut LinkedList<T>) -> bool {
    let Some(mid) = first_half_tail(&*list) else {
        return true;
    };
    let mid = list
        .resolve(mid)
        .expect("runner returns a live node of the same list");

    let second_half = list.next_raw(mid);
    let reversed = list.reverse_links(second_half);
    tracing::trace!(mid, reversed, "second half reversed");

    let mut p1 = list.head_raw();
    let mut p2 = reversed;
    let mut result = true;
    while p2 != 0 {
        if list.value_raw(p1) != list.value_raw(p2) {
            result = false;
            break;
        }
        p1 = list.next_raw(p1);
        p2 = list.next_raw(p2);
    }

    let restored = list.reverse_links(reversed);
    list.set_next_raw(mid, restored);
    tracing::trace!(result, "links restored");
    result
}

/// Recursive palindrome check over any [`ListView`].
///
/// Walks to the tail and compares each node against a front cursor that
/// advances on the way back up. Every frame still compares and advances
/// after a mismatch; the `false` is carried up through all enclosing frames.
/// Recursion depth equals the list length.
pub fn is_palindrome_recursive<V>(list: &V) -> bool
where
    V: ListView,
    V::Item: PartialEq,
{
    fn check<V>(list: &V, node: Option<NodeKey>, front: &mut Option<NodeKey>) -> bool
    where
        V: ListView,
        V::Item: PartialEq,
    {
        let Some(node) = node else {
            return true;
        };
        let rest = check(list, list.next(node), front);
        let Some(f) = *front else {
            return false;
        };
        *front = list.next(f);
        rest && list.get(f) == list.get(node)
    }

    let mut front = list.head();
    check(list, list.head(), &mut front)
}

/// Palindrome check that buffers references to every value and closes two
/// indices towards the middle. O(n) extra space, never touches the list.
pub fn is_palindrome_buffered<V>(list: &V) -> bool
where
    V: ListView,
    V::Item: PartialEq,
{
    let values: Vec<&V::Item> = list.values().collect();
    if values.len() < 2 {
        return true;
    }
    let (mut lo, mut hi) = (0, values.len() - 1);
    while lo < hi {
        if values[lo] != values[hi] {
            return false;
        }
        lo += 1;
        hi -= 1;
    }
    true
}
