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

//! Runner technique: a slow and a fast cursor over the same chain, the fast
//! one stepping twice per step of the slow one.

use crate::list::{key::NodeKey, traits::ListView};

/// Node in the middle of the list.
///
/// On even lengths this is the second of the two middle nodes
/// (`[1, 2, 3, 4, 5, 6]` yields the node holding `4`).
pub fn middle_node<V: ListView>(list: &V) -> Option<NodeKey> {
    let mut slow = list.head()?;
    let mut fast = Some(slow);
    while let Some(f) = fast {
        let Some(after) = list.next(f) else {
            break;
        };
        slow = list.next(slow)?;
        fast = list.next(after);
    }
    Some(slow)
}

/// Value in the middle of the list; see [`middle_node`] for the tie-break.
#[inline]
pub fn middle<V: ListView>(list: &V) -> Option<&V::Item> {
    middle_node(list).and_then(|node| list.get(node))
}

/// Last node of the first half.
///
/// `fast` moves one step per iteration and drags `slow` along only when a
/// second step is possible, so `slow` stops on the exact middle for odd
/// lengths and on the first of the two middles for even lengths. Everything
/// after the returned node is the second half, which never is longer than the
/// first half.
pub fn first_half_tail<V: ListView>(list: &V) -> Option<NodeKey> {
    let mut slow = list.head()?;
    let mut fast = Some(slow);
    while let Some(f) = fast {
        fast = list.next(f);
        if let Some(after) = fast.and_then(|f| list.next(f)) {
            slow = list.next(slow)?;
            fast = Some(after);
        }
    }
    Some(slow)
}
