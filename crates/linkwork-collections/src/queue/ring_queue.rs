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

use crate::queue::{
    err::ZeroCapacityError,
    ring::RingBuffer,
    traits::Queue,
};

/// Bounded queue over a [`RingBuffer`]. `enqueue` fails once `capacity`
/// values are waiting.
#[derive(Debug, Clone)]
pub struct RingBufferQueue<T> {
    ring: RingBuffer<T>,
}

impl<T> RingBufferQueue<T> {
    pub fn new(capacity: usize) -> Result<Self, ZeroCapacityError> {
        Ok(Self {
            ring: RingBuffer::new(capacity)?,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ring.iter()
    }
}

impl<T> Queue<T> for RingBufferQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) -> bool {
        self.ring.write(value)
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.ring.read()
    }

    #[inline]
    fn peek(&mut self) -> Option<&T> {
        self.ring.first()
    }

    #[inline]
    fn count(&self) -> usize {
        self.ring.count()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for RingBufferQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.ring, f)
    }
}
