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
    list::{key::NodeKey, singly::LinkedList, traits::ListView},
    stack::{traits::Stack, vec_stack::VecStack},
};

/// Builds a new list holding the values of `list` in reverse order.
///
/// Recurses to the tail and appends on the way back up, so the recursion depth
/// equals the list length. Prefer [`add_in_reverse_iterative`] for long lists.
pub fn add_in_reverse<V>(list: &V) -> LinkedList<V::Item>
where
    V: ListView,
    V::Item: Clone,
{
    fn visit<V>(list: &V, node: Option<NodeKey>, out: &mut LinkedList<V::Item>)
    where
        V: ListView,
        V::Item: Clone,
    {
        let Some(node) = node else {
            return;
        };
        visit(list, list.next(node), out);
        if let Some(value) = list.get(node) {
            out.append(value.clone());
        }
    }

    let mut out = LinkedList::with_capacity(list.len());
    visit(list, list.head(), &mut out);
    out
}

/// Same result as [`add_in_reverse`], using an explicit stack instead of the
/// call stack.
pub fn add_in_reverse_iterative<V>(list: &V) -> LinkedList<V::Item>
where
    V: ListView,
    V::Item: Clone,
{
    let mut pending: VecStack<&V::Item> = VecStack::with_capacity(list.len());
    for value in list.values() {
        pending.push(value);
    }
    let mut out = LinkedList::with_capacity(list.len());
    while let Some(value) = pending.pop() {
        out.append(value.clone());
    }
    out
}
