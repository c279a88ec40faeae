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

//! FIFO queues: a fixed-capacity [`RingBuffer`] and several [`Queue`]
//! strategies with different cost profiles.

pub mod err;
pub mod linked_queue;
pub mod ring;
pub mod ring_queue;
pub mod rotation;
pub mod stack_queue;
pub mod traits;
pub mod vec_queue;

pub use err::{BufferFullError, ZeroCapacityError};
pub use linked_queue::LinkedQueue;
pub use ring::RingBuffer;
pub use ring_queue::RingBufferQueue;
pub use rotation::{next_player, reverse};
pub use stack_queue::StackQueue;
pub use traits::Queue;
pub use vec_queue::VecQueue;
