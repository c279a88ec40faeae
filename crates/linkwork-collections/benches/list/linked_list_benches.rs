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

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use linkwork_collections::{
    algo::{is_palindrome, merge_sorted, middle_node},
    list::{LinkedList, ListView},
};
use std::hint::black_box;

const LEN: usize = 1_000;

fn palindrome_list() -> LinkedList<usize> {
    (0..LEN / 2).chain((0..LEN / 2).rev()).collect()
}

fn bench_append_pop(c: &mut Criterion) {
    c.bench_function("list/append_then_pop_1000", |b| {
        b.iter(|| {
            let mut list = LinkedList::with_capacity(LEN);
            for i in 0..LEN {
                list.append(black_box(i));
            }
            let mut acc = 0usize;
            while let Some(v) = list.pop() {
                acc = acc.wrapping_add(v);
            }
            black_box(acc)
        })
    });
}

fn bench_slot_reuse(c: &mut Criterion) {
    // Steady state: every push lands in a recycled slot.
    let mut list: LinkedList<usize> = (0..LEN).collect();
    c.bench_function("list/push_pop_recycled_slot", |b| {
        b.iter(|| {
            list.push(black_box(7));
            black_box(list.pop())
        })
    });
}

fn bench_middle(c: &mut Criterion) {
    let list: LinkedList<usize> = (0..LEN).collect();
    c.bench_function("list/middle_node_1000", |b| {
        b.iter(|| black_box(middle_node(black_box(&list))))
    });
}

fn bench_palindrome(c: &mut Criterion) {
    let mut list = palindrome_list();
    c.bench_function("list/is_palindrome_in_place_1000", |b| {
        b.iter(|| black_box(is_palindrome(black_box(&mut list))))
    });
}

fn bench_merge(c: &mut Criterion) {
    let left: LinkedList<usize> = (0..LEN).map(|i| i * 2).collect();
    let right: LinkedList<usize> = (0..LEN).map(|i| i * 2 + 1).collect();
    c.bench_function("list/merge_sorted_2x1000", |b| {
        b.iter_batched(
            || (left.clone(), right.clone()),
            |(l, r)| black_box(merge_sorted(&l, &r).len()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_iterate(c: &mut Criterion) {
    let list: LinkedList<usize> = (0..LEN).collect();
    c.bench_function("list/iterate_values_1000", |b| {
        b.iter(|| {
            let acc = list
                .values()
                .fold(0usize, |acc, v| acc.wrapping_add(*v));
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_append_pop,
    bench_slot_reuse,
    bench_middle,
    bench_palindrome,
    bench_merge,
    bench_iterate
);
criterion_main!(benches);
