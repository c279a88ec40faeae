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
    list::{doubly::DoublyLinkedList, traits::ListView},
    queue::traits::{Queue, write_items},
};

/// Queue on a [`DoublyLinkedList`]; every operation is O(1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedQueue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.list.iter()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        self.list.append(value);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn peek(&mut self) -> Option<&T> {
        self.list.first()
    }

    #[inline]
    fn count(&self) -> usize {
        self.list.len()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_items(f, self.iter())
    }
}
