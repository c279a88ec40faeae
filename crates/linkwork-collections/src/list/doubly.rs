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

use crate::list::{
    err::InvalidNodeError,
    key::{ListId, NodeKey},
    slab::NodeSlab,
    traits::{ListView, Values},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Links {
    prev: usize,
    next: usize,
}

/// Doubly linked list over an index arena.
///
/// Knowing both neighbours makes `remove(node)` O(1) without a walk, which is
/// what the linked queue relies on.
pub struct DoublyLinkedList<T> {
    slab: NodeSlab<T, Links>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[inline]
    pub fn with_capacity(node_cap: usize) -> Self {
        Self {
            slab: NodeSlab::with_capacity(node_cap),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> ListId {
        self.slab.owner()
    }

    /// Links `value` behind the tail and returns its handle.
    pub fn append(&mut self, value: T) -> NodeKey {
        let raw = self.slab.alloc(value, Links::default());
        self.link_between(raw, self.tail, 0);
        self.slab.key(raw)
    }

    /// Links `value` in front of the head and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeKey {
        let raw = self.slab.alloc(value, Links::default());
        self.link_between(raw, 0, self.head);
        self.slab.key(raw)
    }

    /// Handle of the first node.
    #[inline]
    pub fn first_node(&self) -> Option<NodeKey> {
        self.head()
    }

    #[inline]
    pub fn prev(&self, node: NodeKey) -> Option<NodeKey> {
        let raw = self.slab.resolve(node).ok()?;
        let prev = self.slab.links(raw).prev;
        (prev != 0).then(|| self.slab.key(prev))
    }

    /// Unlinks `node` using its own neighbour links. O(1).
    pub fn remove(&mut self, node: NodeKey) -> Result<T, InvalidNodeError> {
        let raw = self.slab.resolve(node)?;
        self.detach(raw);
        // `resolve` succeeded, so the slot holds a value.
        Ok(self
            .slab
            .release(raw)
            .expect("resolved slot must hold a value"))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == 0 {
            return None;
        }
        let raw = self.head;
        self.detach(raw);
        self.slab.release(raw)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == 0 {
            return None;
        }
        let raw = self.tail;
        self.detach(raw);
        self.slab.release(raw)
    }

    #[inline]
    pub fn get_mut(&mut self, node: NodeKey) -> Option<&mut T> {
        let raw = self.slab.resolve(node).ok()?;
        self.slab.value_mut(raw)
    }

    #[inline]
    pub fn iter(&self) -> Values<'_, Self> {
        self.values()
    }

    pub fn clear(&mut self) {
        self.slab.clear();
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Links a detached slot between `prev` and `next` (`0` meaning the list
    /// boundary on that side).
    #[inline]
    fn link_between(&mut self, raw: usize, prev: usize, next: usize) {
        *self.slab.links_mut(raw) = Links { prev, next };
        match prev {
            0 => self.head = raw,
            p => self.slab.links_mut(p).next = raw,
        }
        match next {
            0 => self.tail = raw,
            n => self.slab.links_mut(n).prev = raw,
        }
        self.len += 1;
    }

    #[inline]
    fn detach(&mut self, raw: usize) {
        let Links { prev, next } = self.slab.links(raw);
        match prev {
            0 => self.head = next,
            p => self.slab.links_mut(p).next = next,
        }
        match next {
            0 => self.tail = prev,
            n => self.slab.links_mut(n).prev = prev,
        }
        *self.slab.links_mut(raw) = Links::default();
        self.len -= 1;
    }
}

impl<T> ListView for DoublyLinkedList<T> {
    type Item = T;

    #[inline]
    fn head(&self) -> Option<NodeKey> {
        (self.head != 0).then(|| self.slab.key(self.head))
    }

    #[inline]
    fn tail(&self) -> Option<NodeKey> {
        (self.tail != 0).then(|| self.slab.key(self.tail))
    }

    #[inline]
    fn next(&self, node: NodeKey) -> Option<NodeKey> {
        let raw = self.slab.resolve(node).ok()?;
        let next = self.slab.links(raw).next;
        (next != 0).then(|| self.slab.key(next))
    }

    #[inline]
    fn get(&self, node: NodeKey) -> Option<&T> {
        let raw = self.slab.resolve(node).ok()?;
        self.slab.value(raw)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        Self {
            slab: self.slab.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty list");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn back_to_front<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
        let mut out = Vec::new();
        let mut current = list.tail();
        while let Some(node) = current {
            out.push(list.get(node).unwrap().clone());
            current = list.prev(node);
        }
        out
    }

    fn assert_list_eq(list: &DoublyLinkedList<i32>, expected: &[i32]) {
        assert_eq!(list.len(), expected.len(), "len mismatch");
        assert_eq!(to_vec(list), expected, "forward order mismatch");
        let mut expected_rev = expected.to_vec();
        expected_rev.reverse();
        assert_eq!(back_to_front(list), expected_rev, "backward order mismatch");
        assert_eq!(list.is_empty(), list.head().is_none());
        assert_eq!(list.is_empty(), list.tail().is_none());
    }

    #[test]
    fn test_append_and_node_lookup() {
        let list: DoublyLinkedList<i32> = [2, 4, 5, 6, 9].into_iter().collect();
        assert_list_eq(&list, &[2, 4, 5, 6, 9]);
        let third = list.node_at(3).unwrap();
        assert_eq!(list.get(third), Some(&6));
        assert_eq!(list.to_string(), "2 -> 4 -> 5 -> 6 -> 9");
    }

    #[test]
    fn test_remove_middle_head_and_tail() {
        let mut list: DoublyLinkedList<i32> = [2, 4, 5, 6, 9].into_iter().collect();
        let node = list.node_at(3).unwrap();
        assert_eq!(list.remove(node), Ok(6));
        assert_list_eq(&list, &[2, 4, 5, 9]);

        let head = list.first_node().unwrap();
        assert_eq!(list.remove(head), Ok(2));
        assert_list_eq(&list, &[4, 5, 9]);

        let tail = list.tail().unwrap();
        assert_eq!(list.remove(tail), Ok(9));
        assert_list_eq(&list, &[4, 5]);

        assert!(matches!(list.remove(tail), Err(InvalidNodeError::Stale(_))));
    }

    #[test]
    fn test_push_front_pop_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_front(2);
        list.push_front(1);
        list.append(3);
        assert_list_eq(&list, &[1, 2, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_list_eq(&list, &[]);
        assert_eq!(list.to_string(), "Empty list");
    }

    #[test]
    fn test_foreign_node_rejected() {
        let mut a: DoublyLinkedList<i32> = [1].into_iter().collect();
        let b: DoublyLinkedList<i32> = [1].into_iter().collect();
        let foreign = b.head().unwrap();
        assert!(matches!(
            a.remove(foreign),
            Err(InvalidNodeError::Foreign(_))
        ));
        assert_list_eq(&a, &[1]);
    }
}
