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

use criterion::{Criterion, criterion_group, criterion_main};
use linkwork_collections::queue::{LinkedQueue, Queue, RingBuffer, StackQueue, VecQueue};
use std::hint::black_box;

const CAPACITY: usize = 256;

fn bench_ring_write_read(c: &mut Criterion) {
    let mut ring = RingBuffer::new(CAPACITY).expect("capacity is non-zero");
    for i in 0..CAPACITY / 2 {
        ring.write(i);
    }
    c.bench_function("ring/write_read_half_full", |b| {
        b.iter(|| {
            let accepted = ring.write(black_box(1usize));
            black_box(accepted);
            black_box(ring.read())
        })
    });
}

fn churn<Q: Queue<usize>>(queue: &mut Q) -> usize {
    let mut acc = 0usize;
    for i in 0..CAPACITY {
        queue.enqueue(i);
        if i % 3 == 0 {
            acc = acc.wrapping_add(queue.dequeue().unwrap_or(0));
        }
    }
    while let Some(v) = queue.dequeue() {
        acc = acc.wrapping_add(v);
    }
    acc
}

fn bench_queue_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue/churn_256");
    group.bench_function("vec", |b| {
        b.iter(|| black_box(churn(&mut VecQueue::new())))
    });
    group.bench_function("linked", |b| {
        b.iter(|| black_box(churn(&mut LinkedQueue::new())))
    });
    group.bench_function("two_stacks", |b| {
        b.iter(|| black_box(churn(&mut StackQueue::new())))
    });
    group.finish();
}

criterion_group!(benches, bench_ring_write_read, bench_queue_strategies);
criterion_main!(benches);
