// Copyright (c) 2025 the Hawser contributors.
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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hawser_seq::LazySequence;

fn bench_full_traversal(c: &mut Criterion) {
    let seq: LazySequence<u64> = (0..10_000u64).collect();

    c.bench_function("traverse_owned_10k", |b| {
        b.iter(|| {
            let sum: u64 = black_box(&seq).iter().sum();
            black_box(sum)
        })
    });
}

fn bench_cycle_strategies(c: &mut Criterion) {
    let restartable: LazySequence<u64> = (0..1_000u64).collect();

    c.bench_function("cycle_restartable_1k_x10", |b| {
        b.iter(|| {
            let out: u64 = black_box(&restartable).cycle(Some(10)).iter().sum();
            black_box(out)
        })
    });

    c.bench_function("cycle_buffered_1k_x10", |b| {
        b.iter(|| {
            let single_pass = LazySequence::from_stream(0..1_000u64);
            let out: u64 = single_pass.cycle(Some(10)).iter().sum();
            black_box(out)
        })
    });
}

fn bench_slicing(c: &mut Criterion) {
    let seq: LazySequence<u64> = (0..100_000u64).collect();

    c.bench_function("slice_stride_16_of_100k", |b| {
        b.iter(|| {
            let out: u64 = black_box(&seq)
                .get_slice(0, None, 16)
                .unwrap()
                .iter()
                .sum();
            black_box(out)
        })
    });

    c.bench_function("head_1k_of_100k", |b| {
        b.iter(|| {
            let out: u64 = black_box(&seq).head(1_000).iter().sum();
            black_box(out)
        })
    });
}

fn bench_insert_mid_chain(c: &mut Criterion) {
    c.bench_function("insert_mid_10k", |b| {
        b.iter(|| {
            let mut seq: LazySequence<u64> = (0..10_000u64).collect();
            seq.insert(5_000, black_box(42));
            black_box(seq.get_at(5_000))
        })
    });
}

criterion_group!(
    benches,
    bench_full_traversal,
    bench_cycle_strategies,
    bench_slicing,
    bench_insert_mid_chain
);
criterion_main!(benches);
