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
    err::{ForeignNodeError, InvalidNodeError, StaleNodeError},
    key::{ListId, NodeKey},
};

/// Slot storage shared by the list implementations.
///
/// Values, link records and generations live in parallel vectors indexed by a
/// 1-based raw slot index; slot `0` is a permanent placeholder so that a raw
/// link of `0` means "none". Released slots go on a free list and are handed
/// out again by `alloc`.
#[derive(Debug)]
pub(crate) struct NodeSlab<T, L> {
    owner: ListId,
    values: Vec<Option<T>>,
    links: Vec<L>,
    generations: Vec<u64>,
    free_list: Vec<usize>,
}

impl<T, L: Copy + Default> NodeSlab<T, L> {
    #[inline]
    pub(crate) fn with_capacity(node_cap: usize) -> Self {
        let mut values = Vec::with_capacity(node_cap + 1);
        values.push(None);
        let mut links = Vec::with_capacity(node_cap + 1);
        links.push(L::default());
        let mut generations = Vec::with_capacity(node_cap + 1);
        generations.push(0);
        Self {
            owner: ListId::fresh(),
            values,
            links,
            generations,
            free_list: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn owner(&self) -> ListId {
        self.owner
    }

    /// Number of slots that can be handed out without growing the vectors.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity().saturating_sub(1)
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.links.reserve(additional);
        self.generations.reserve(additional);
    }

    /// Stores `value` in a free slot and returns its raw index.
    #[inline]
    pub(crate) fn alloc(&mut self, value: T, links: L) -> usize {
        if let Some(raw) = self.free_list.pop() {
            debug_assert!(self.values[raw].is_none());
            self.values[raw] = Some(value);
            self.links[raw] = links;
            return raw;
        }
        self.values.push(Some(value));
        self.links.push(links);
        self.generations.push(0);
        self.values.len() - 1
    }

    /// Frees the slot and returns the value it held.
    ///
    /// Every key minted for the slot so far becomes stale.
    #[inline]
    pub(crate) fn release(&mut self, raw: usize) -> Option<T> {
        let value = self.values[raw].take()?;
        self.links[raw] = L::default();
        self.generations[raw] = self.generations[raw].wrapping_add(1);
        self.free_list.push(raw);
        Some(value)
    }

    #[inline]
    pub(crate) fn key(&self, raw: usize) -> NodeKey {
        NodeKey::new(self.owner, raw, self.generations[raw])
    }

    /// Maps a key back to its live raw slot.
    #[inline]
    pub(crate) fn resolve(&self, node: NodeKey) -> Result<usize, InvalidNodeError> {
        if node.list() != self.owner {
            return Err(ForeignNodeError::new(node, self.owner).into());
        }
        let raw = node.get();
        let live = raw < self.values.len()
            && self.values[raw].is_some()
            && self.generations[raw] == node.generation();
        if live {
            Ok(raw)
        } else {
            Err(StaleNodeError::new(node).into())
        }
    }

    #[inline]
    pub(crate) fn value(&self, raw: usize) -> Option<&T> {
        self.values.get(raw).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, raw: usize) -> Option<&mut T> {
        self.values.get_mut(raw).and_then(Option::as_mut)
    }

    #[inline(always)]
    pub(crate) fn links(&self, raw: usize) -> L {
        self.links[raw]
    }

    #[inline(always)]
    pub(crate) fn links_mut(&mut self, raw: usize) -> &mut L {
        &mut self.links[raw]
    }

    /// Releases every live slot. Keys handed out before the call go stale.
    pub(crate) fn clear(&mut self) {
        for raw in 1..self.values.len() {
            if self.values[raw].is_some() {
                let _ = self.release(raw);
            }
        }
    }
}

impl<T: Clone, L: Copy> Clone for NodeSlab<T, L> {
    /// Copies the storage under a fresh owner id, so keys of the source list
    /// are rejected as foreign by the copy.
    fn clone(&self) -> Self {
        Self {
            owner: ListId::fresh(),
            values: self.values.clone(),
            links: self.links.clone(),
            generations: self.generations.clone(),
            free_list: self.free_list.clone(),
        }
    }
}
