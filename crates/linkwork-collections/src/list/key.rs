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

use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a list instance.
///
/// Every list draws a fresh id on construction (and on `clone`), which lets a
/// list recognise node handles that were minted by somebody else.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    #[inline]
    pub(crate) fn fresh() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListId({})", self.0)
    }
}

/// A non-owning handle to a node inside a list.
///
/// The slot index is 1-based and stored as `NonZeroUsize`, so the raw value
/// `0` stays free to encode "no node" in the link vectors. The generation is
/// bumped whenever a slot is released, which turns a handle to a removed node
/// into a detectable stale handle instead of an alias of whatever node reuses
/// the slot later. Generations are 64-bit, so a slot would have to be reused
/// 2^64 times before an old handle could alias a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    list: ListId,
    slot: NonZeroUsize,
    generation: u64,
}

impl NodeKey {
    /// Creates a key from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `one_based_index` is zero.
    #[inline]
    pub(crate) fn new(list: ListId, one_based_index: usize, generation: u64) -> Self {
        Self {
            list,
            slot: NonZeroUsize::new(one_based_index).expect("NodeKey indices must be 1-based"),
            generation,
        }
    }

    /// The list that minted this key.
    #[inline]
    pub fn list(self) -> ListId {
        self.list
    }

    /// Returns the underlying slot index of the key (1-based).
    #[inline]
    pub fn get(self) -> usize {
        self.slot.get()
    }

    #[inline]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeKey({}#{}@{})", self.list.0, self.slot, self.generation)
    }
}
