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

/// Singly linked list over an index arena.
///
/// The list exclusively owns its values; callers only ever hold [`NodeKey`]s,
/// which are plain non-owning handles. Raw link value `0` means "no node".
///
/// Invariants:
/// * `len == 0` iff `head == 0` iff `tail == 0`
/// * following `next` from `head` visits exactly `len` nodes and ends at `tail`
/// * `next[tail] == 0`
pub struct LinkedList<T> {
    /// Per slot, the raw index of the successor.
    slab: NodeSlab<T, usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> LinkedList<T> {
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

    /// Identity used to tell this list's node handles apart from others.
    #[inline]
    pub fn id(&self) -> ListId {
        self.slab.owner()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slab.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.slab.reserve(additional);
    }

    /// Inserts `value` in front of the current head. O(1).
    pub fn push(&mut self, value: T) -> &mut Self {
        let raw = self.slab.alloc(value, self.head);
        self.head = raw;
        if self.tail == 0 {
            self.tail = raw;
        }
        self.len += 1;
        self
    }

    /// Links `value` behind the current tail. O(1).
    pub fn append(&mut self, value: T) -> &mut Self {
        if self.is_empty() {
            return self.push(value);
        }
        let raw = self.slab.alloc(value, 0);
        self.set_next_raw(self.tail, raw);
        self.tail = raw;
        self.len += 1;
        self
    }

    /// Splices `value` in right after `after` and returns the new node.
    ///
    /// Inserting after the tail behaves like [`append`](Self::append) and
    /// moves the tail.
    pub fn insert(&mut self, value: T, after: NodeKey) -> Result<NodeKey, InvalidNodeError> {
        let anchor = self.slab.resolve(after)?;
        if anchor == self.tail {
            self.append(value);
            return Ok(self.slab.key(self.tail));
        }
        let raw = self.slab.alloc(value, self.next_raw(anchor));
        self.set_next_raw(anchor, raw);
        self.len += 1;
        Ok(self.slab.key(raw))
    }

    /// Removes the head and returns its value. O(1).
    pub fn pop(&mut self) -> Option<T> {
        if self.head == 0 {
            return None;
        }
        let raw = self.head;
        self.head = self.next_raw(raw);
        if self.head == 0 {
            self.tail = 0;
        }
        self.len -= 1;
        self.slab.release(raw)
    }

    /// Removes the tail and returns its value. O(len), since the
    /// second-to-last node has to be found by walking from the head.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.head == 0 {
            return None;
        }
        if self.next_raw(self.head) == 0 {
            return self.pop();
        }
        let mut prev = self.head;
        let mut current = self.next_raw(prev);
        while self.next_raw(current) != 0 {
            prev = current;
            current = self.next_raw(current);
        }
        self.set_next_raw(prev, 0);
        self.tail = prev;
        self.len -= 1;
        self.slab.release(current)
    }

    /// Unlinks the successor of `node` and returns its value.
    ///
    /// Returns `Ok(None)` when `node` is the tail.
    pub fn remove_after(&mut self, node: NodeKey) -> Result<Option<T>, InvalidNodeError> {
        let anchor = self.slab.resolve(node)?;
        Ok(self.unlink_after_raw(anchor))
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

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Removes the first node holding `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = 0usize;
        let mut current = self.head;
        while current != 0 {
            if self.slab.value(current) == Some(value) {
                let _ = self.unlink_raw(prev, current);
                return true;
            }
            prev = current;
            current = self.next_raw(current);
        }
        false
    }

    /// Keeps only the values for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = 0usize;
        let mut current = self.head;
        while current != 0 {
            let next = self.next_raw(current);
            let stays = self.slab.value(current).is_some_and(&mut keep);
            if stays {
                prev = current;
            } else {
                let _ = self.unlink_raw(prev, current);
            }
            current = next;
        }
    }

    pub fn clear(&mut self) {
        self.slab.clear();
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Reverses the list in place by rewiring links; no value moves.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let old_head = self.head;
        self.head = self.reverse_links(old_head);
        self.tail = old_head;
    }

    #[inline]
    pub(crate) fn head_raw(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub(crate) fn next_raw(&self, raw: usize) -> usize {
        self.slab.links(raw)
    }

    #[inline(always)]
    pub(crate) fn set_next_raw(&mut self, raw: usize, next: usize) {
        *self.slab.links_mut(raw) = next;
    }

    #[inline]
    pub(crate) fn value_raw(&self, raw: usize) -> Option<&T> {
        self.slab.value(raw)
    }

    #[inline]
    pub(crate) fn resolve(&self, node: NodeKey) -> Result<usize, InvalidNodeError> {
        self.slab.resolve(node)
    }

    /// Three-pointer reversal of the chain starting at `start`; returns the
    /// new first node of that chain.
    ///
    /// Only links are touched: `head`, `tail` and `len` keep their old values,
    /// so the caller is responsible for restoring a consistent list before
    /// anything else observes it.
    pub(crate) fn reverse_links(&mut self, start: usize) -> usize {
        let mut prev = 0usize;
        let mut current = start;
        while current != 0 {
            let next = self.next_raw(current);
            self.set_next_raw(current, prev);
            prev = current;
            current = next;
        }
        prev
    }

    fn unlink_after_raw(&mut self, anchor: usize) -> Option<T> {
        let victim = self.next_raw(anchor);
        if victim == 0 {
            return None;
        }
        self.unlink_raw(anchor, victim)
    }

    /// Unlinks `victim`, whose predecessor is `prev` (`0` for the head).
    fn unlink_raw(&mut self, prev: usize, victim: usize) -> Option<T> {
        if prev == 0 {
            debug_assert_eq!(victim, self.head);
            return self.pop();
        }
        let after = self.next_raw(victim);
        self.set_next_raw(prev, after);
        if victim == self.tail {
            self.tail = prev;
        }
        self.len -= 1;
        self.slab.release(victim)
    }
}

impl<T> ListView for LinkedList<T> {
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
        let next = self.next_raw(raw);
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

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        Self {
            slab: self.slab.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LinkedList<T> {
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

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Owning iterator; drains the list from the head.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, LinkedList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::err::InvalidNodeError;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn to_vec<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn assert_invariants<T>(list: &LinkedList<T>) {
        if list.len == 0 {
            assert_eq!(list.head, 0, "head should be none on empty list");
            assert_eq!(list.tail, 0, "tail should be none on empty list");
            return;
        }
        assert_ne!(list.head, 0);
        assert_ne!(list.tail, 0);
        let mut visited = 0usize;
        let mut last = 0usize;
        let mut current = list.head;
        while current != 0 {
            visited += 1;
            assert!(visited <= list.len, "cycle or overlong chain");
            last = current;
            current = list.next_raw(current);
        }
        assert_eq!(visited, list.len, "len mismatch");
        assert_eq!(last, list.tail, "walk does not end at tail");
        assert_eq!(list.next_raw(list.tail), 0, "tail has a successor");
    }

    #[test]
    fn test_push_is_fluent_and_front_inserting() {
        let mut list = LinkedList::new();
        list.push(3).push(2).push(1);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_invariants(&list);
    }

    #[test]
    fn test_append_on_empty_sets_head_and_tail() {
        let mut list = LinkedList::new();
        list.append(1);
        assert_eq!(list.head(), list.tail());
        list.append(2).append(3);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert_invariants(&list);
    }

    #[test]
    fn test_node_at_bounds() {
        let list: LinkedList<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(list.node_at(0), list.head());
        assert_eq!(list.node_at(2), list.tail());
        assert_eq!(list.node_at(3), None);
        assert_eq!(list.get(list.node_at(1).unwrap()), Some(&20));

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.node_at(0), None);
    }

    #[test]
    fn test_insert_walkthrough() {
        let mut list = LinkedList::new();
        list.push(3).push(2).push(1);
        list.append(4);

        let mut middle = list.node_at(1).unwrap();
        for i in 1..=3 {
            middle = list.insert(-i, middle).unwrap();
        }
        assert_eq!(list.get(middle), Some(&-3));
        assert_eq!(to_vec(&list), vec![1, 2, -1, -2, -3, 3, 4]);
        assert_invariants(&list);

        assert_eq!(list.pop(), Some(1));
        list.append(10);
        assert_eq!(list.remove_last(), Some(10));
        assert_eq!(to_vec(&list), vec![2, -1, -2, -3, 3, 4]);

        let node = list.node_at(0).unwrap();
        assert_eq!(list.remove_after(node), Ok(Some(-1)));
        assert_eq!(to_vec(&list), vec![2, -2, -3, 3, 4]);
        assert_eq!(list.to_string(), "2 -> -2 -> -3 -> 3 -> 4");
        assert_invariants(&list);
    }

    #[test]
    fn test_insert_after_tail_moves_tail() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        let tail = list.tail().unwrap();
        let new_node = list.insert(3, tail).unwrap();
        assert_eq!(list.tail(), Some(new_node));
        list.append(4);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
        assert_invariants(&list);
    }

    #[test]
    fn test_pop_until_empty_clears_tail() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), None);
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
        assert_invariants(&list);
        list.append(5);
        assert_eq!(to_vec(&list), vec![5]);
    }

    #[test]
    fn test_remove_last_single_and_empty() {
        let mut list = LinkedList::new();
        assert_eq!(list.remove_last(), None);
        list.append("only");
        assert_eq!(list.remove_last(), Some("only"));
        assert!(list.is_empty());
        assert_invariants(&list);
    }

    #[test]
    fn test_remove_after_tail_is_none_and_updates_tail() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let tail = list.tail().unwrap();
        assert_eq!(list.remove_after(tail), Ok(None));
        assert_eq!(list.len(), 3);

        let second = list.node_at(1).unwrap();
        assert_eq!(list.remove_after(second), Ok(Some(3)));
        assert_eq!(list.tail(), Some(second));
        list.append(9);
        assert_eq!(to_vec(&list), vec![1, 2, 9]);
        assert_invariants(&list);
    }

    #[test]
    fn test_foreign_and_stale_handles_are_errors() {
        let mut a: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let b: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let foreign = b.head().unwrap();

        assert!(matches!(
            a.insert(0, foreign),
            Err(InvalidNodeError::Foreign(_))
        ));
        assert!(matches!(
            a.remove_after(foreign),
            Err(InvalidNodeError::Foreign(_))
        ));

        let head = a.head().unwrap();
        assert_eq!(a.pop(), Some(1));
        assert!(matches!(a.insert(0, head), Err(InvalidNodeError::Stale(_))));
        assert_eq!(a.get(head), None);
        assert_eq!(a.next(head), None);

        // Reusing the freed slot must not revive the old handle.
        a.push(7);
        assert!(a.remove_after(head).is_err());
        assert_eq!(to_vec(&a), vec![7, 2, 3]);
        assert_invariants(&a);
    }

    #[test]
    fn test_clone_has_foreign_handles() {
        let a: LinkedList<i32> = [1, 2].into_iter().collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
        assert!(b.insert(5, a.head().unwrap()).is_err());
    }

    #[test]
    fn test_contains_remove_retain_clear() {
        let mut list: LinkedList<i32> = (1..=8).collect();
        assert!(list.contains(&4));
        assert!(list.remove(&1));
        assert!(list.remove(&8));
        assert!(!list.remove(&42));
        assert_eq!(to_vec(&list), vec![2, 3, 4, 5, 6, 7]);
        assert_invariants(&list);

        list.retain(|v| v % 2 == 0);
        assert_eq!(to_vec(&list), vec![2, 4, 6]);
        assert_eq!(list.last(), Some(&6));
        assert_invariants(&list);

        list.retain(|_| false);
        assert!(list.is_empty());
        assert_invariants(&list);

        list.extend([1, 2]);
        let stale = list.head().unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(stale), None);
        assert_invariants(&list);
    }

    #[test]
    fn test_reverse_in_place() {
        let mut list: LinkedList<i32> = (1..=5).collect();
        let old_head = list.head();
        list.reverse();
        assert_eq!(to_vec(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.tail(), old_head);
        assert_invariants(&list);
        list.append(0);
        assert_eq!(list.last(), Some(&0));
    }

    #[test]
    fn test_display_and_debug() {
        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.to_string(), "Empty list");
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "1 -> 2 -> 3");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let list: LinkedList<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let collected: Vec<String> = list.into_iter().collect();
        assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_randomized_against_vecdeque() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        let mut list = LinkedList::new();
        let mut model: VecDeque<u32> = VecDeque::new();

        for step in 0..5_000u32 {
            match rng.random_range(0..6) {
                0 => {
                    list.push(step);
                    model.push_front(step);
                }
                1 => {
                    list.append(step);
                    model.push_back(step);
                }
                2 => assert_eq!(list.pop(), model.pop_front()),
                3 => assert_eq!(list.remove_last(), model.pop_back()),
                4 if !model.is_empty() => {
                    let i = rng.random_range(0..model.len());
                    let node = list.node_at(i).unwrap();
                    list.insert(step, node).unwrap();
                    model.insert(i + 1, step);
                }
                5 if !model.is_empty() => {
                    let i = rng.random_range(0..model.len());
                    let node = list.node_at(i).unwrap();
                    let expected = model.remove(i + 1);
                    assert_eq!(list.remove_after(node), Ok(expected));
                }
                _ => {}
            }
            assert_eq!(list.len(), model.len());
            if step % 64 == 0 {
                assert_invariants(&list);
                assert!(list.iter().eq(model.iter()));
                if let Some(last) = model.len().checked_sub(1) {
                    assert_eq!(list.node_at(last), list.tail());
                }
                assert_eq!(list.node_at(model.len()), None);
            }
        }
    }
}
