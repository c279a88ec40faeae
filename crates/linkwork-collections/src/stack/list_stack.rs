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
    list::{singly::LinkedList, traits::ListView},
    stack::traits::Stack,
};

/// Stack on a singly linked list; the top is the list head, so both push and
/// pop are O(1) without touching the tail walk in `remove_last`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStack<T> {
    storage: LinkedList<T>,
}

impl<T> ListStack<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: LinkedList::new(),
        }
    }

    /// Elements from the top down.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage.iter()
    }
}

impl<T> Stack<T> for ListStack<T> {
    #[inline]
    fn push(&mut self, element: T) {
        self.storage.push(element);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    #[inline]
    fn count(&self) -> usize {
        self.storage.len()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ListStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.storage.is_empty() {
            return write!(f, "Empty stack");
        }
        write!(f, "{}", self.storage)
    }
}
