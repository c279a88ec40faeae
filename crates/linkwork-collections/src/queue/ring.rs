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

use crate::queue::err::{BufferFullError, ZeroCapacityError};
use std::num::NonZeroUsize;

/// Fixed-capacity FIFO buffer.
///
/// `write_index` and `read_index` only ever grow; the slot for either is the
/// counter modulo the capacity. `write_index - read_index` is the number of
/// stored values and never exceeds the capacity. Backing storage grows on
/// demand until it holds `capacity` slots and is never reallocated after
/// that.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    capacity: NonZeroUsize,
    write_index: usize,
    read_index: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self, ZeroCapacityError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ZeroCapacityError)?;
        Ok(Self {
            slots: Vec::new(),
            capacity,
            write_index: 0,
            read_index: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.write_index - self.read_index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> usize {
        index % self.capacity
    }

    /// Stores `value` behind the newest element. Returns `false`, dropping
    /// `value`, when the buffer is full. See [`RingBuffer::try_write`] to get
    /// the value back instead.
    pub fn write(&mut self, value: T) -> bool {
        self.try_write(value).is_ok()
    }

    pub fn try_write(&mut self, value: T) -> Result<(), BufferFullError<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "ring buffer full, write rejected");
            return Err(BufferFullError::new(value, self.capacity()));
        }
        let pos = self.slot(self.write_index);
        if pos == self.slots.len() {
            self.slots.push(Some(value));
        } else {
            self.slots[pos] = Some(value);
        }
        self.write_index += 1;
        Ok(())
    }

    /// Removes and returns the oldest value.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let pos = self.slot(self.read_index);
        let value = self.slots.get_mut(pos).and_then(Option::take);
        self.read_index += 1;
        value
    }

    /// The oldest value, without consuming it.
    pub fn first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots.get(self.slot(self.read_index))?.as_ref()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (self.read_index..self.write_index)
            .filter_map(move |index| self.slots.get(self.slot(index))?.as_ref())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::queue::traits::write_items(f, self.iter())
    }
}
