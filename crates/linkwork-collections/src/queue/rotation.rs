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
    queue::traits::Queue,
    stack::{traits::Stack, vec_stack::VecStack},
};

/// Takes the front value, re-enqueues it at the back and returns it.
///
/// Round-robin turn order: repeated calls cycle through the queue. Works on
/// bounded queues too since a slot is freed before it is refilled.
pub fn next_player<T, Q>(queue: &mut Q) -> Option<T>
where
    T: Clone,
    Q: Queue<T> + ?Sized,
{
    let player = queue.dequeue()?;
    let requeued = queue.enqueue(player.clone());
    debug_assert!(requeued, "a dequeued slot must accept the value again");
    Some(player)
}

/// Reverses the order of `queue` by draining it through a stack.
pub fn reverse<T, Q>(queue: &mut Q)
where
    Q: Queue<T> + ?Sized,
{
    let mut stack = VecStack::with_capacity(queue.count());
    while let Some(value) = queue.dequeue() {
        stack.push(value);
    }
    while let Some(value) = stack.pop() {
        queue.enqueue(value);
    }
}
