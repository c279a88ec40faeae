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
    queue::traits::{Queue, write_items},
    stack::{list_stack::ListStack, traits::Stack},
};

/// Queue made of two stacks.
///
/// `enqueue` pushes onto `right`. `dequeue` and `peek` serve from `left`, and
/// only when `left` is empty is all of `right` popped over onto it, which
/// reverses it into FIFO order. Each value crosses over at most once, so a
/// sequence of `n` operations costs O(n) in total.
#[derive(Debug, Clone, Default)]
pub struct StackQueue<T> {
    left: ListStack<T>,
    right: ListStack<T>,
}

impl<T> StackQueue<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            left: ListStack::new(),
            right: ListStack::new(),
        }
    }

    fn refill_left(&mut self) {
        if !self.left.is_empty() {
            return;
        }
        let mut moved = 0usize;
        while let Some(value) = self.right.pop() {
            self.left.push(value);
            moved += 1;
        }
        if moved > 0 {
            tracing::trace!(moved, "moved right stack onto left stack");
        }
    }

    /// Front to back, without reorganizing the stacks.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut back: Vec<&T> = self.right.iter().collect();
        back.reverse();
        self.left.iter().chain(back)
    }
}

impl<T> Queue<T> for StackQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        self.right.push(value);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.refill_left();
        self.left.pop()
    }

    fn peek(&mut self) -> Option<&T> {
        self.refill_left();
        self.left.peek()
    }

    #[inline]
    fn count(&self) -> usize {
        self.left.count() + self.right.count()
    }
}

/// Queues are equal when they hold the same values in the same FIFO order,
/// however those values are split between the two stacks.
impl<T: PartialEq> PartialEq for StackQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for StackQueue<T> {}

impl<T: std::fmt::Display> std::fmt::Display for StackQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_items(f, self.iter())
    }
}
