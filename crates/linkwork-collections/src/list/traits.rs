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

use crate::list::key::NodeKey;
use std::iter::FusedIterator;

/// Read-only access to a chain of nodes, head to tail.
///
/// Lookups never fail loudly: a handle that does not resolve (foreign or
/// removed) yields `None`, exactly like walking off the end of the chain.
pub trait ListView {
    type Item;

    fn head(&self) -> Option<NodeKey>;
    fn tail(&self) -> Option<NodeKey>;
    fn next(&self, node: NodeKey) -> Option<NodeKey>;
    fn get(&self, node: NodeKey) -> Option<&Self::Item>;
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks `index` links from the head. O(index).
    #[inline]
    fn node_at(&self, index: usize) -> Option<NodeKey> {
        if index >= self.len() {
            return None;
        }
        let mut current = self.head()?;
        for _ in 0..index {
            current = self.next(current)?;
        }
        Some(current)
    }

    #[inline]
    fn first(&self) -> Option<&Self::Item> {
        self.head().and_then(|h| self.get(h))
    }

    #[inline]
    fn last(&self) -> Option<&Self::Item> {
        self.tail().and_then(|t| self.get(t))
    }

    #[inline]
    fn is_head(&self, node: NodeKey) -> bool {
        self.head() == Some(node)
    }

    #[inline]
    fn is_tail(&self, node: NodeKey) -> bool {
        self.tail() == Some(node)
    }

    /// Handles of all nodes, head to tail.
    #[inline]
    fn iter_nodes(&self) -> NodeIter<'_, Self>
    where
        Self: Sized,
    {
        NodeIter::new(self)
    }

    /// References to all values, head to tail.
    #[inline]
    fn values(&self) -> Values<'_, Self>
    where
        Self: Sized,
    {
        Values {
            nodes: NodeIter::new(self),
        }
    }
}

#[derive(Debug)]
pub struct NodeIter<'a, V: ListView> {
    view: &'a V,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<'a, V: ListView> NodeIter<'a, V> {
    fn new(view: &'a V) -> Self {
        Self {
            view,
            next: view.head(),
            remaining: view.len(),
        }
    }
}

impl<V: ListView> Clone for NodeIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<V: ListView> Iterator for NodeIter<'_, V> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.next = self.view.next(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: ListView> ExactSizeIterator for NodeIter<'_, V> {}

impl<V: ListView> FusedIterator for NodeIter<'_, V> {}

#[derive(Debug)]
pub struct Values<'a, V: ListView> {
    nodes: NodeIter<'a, V>,
}

impl<V: ListView> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, V: ListView> Iterator for Values<'a, V> {
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.nodes.view;
        self.nodes.next().and_then(|node| view.get(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<V: ListView> ExactSizeIterator for Values<'_, V> {}

impl<V: ListView> FusedIterator for Values<'_, V> {}
