// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use signpost_sections::{SectionBounds, SectionSample};
use signpost_spy::{ActiveResolver, ContainmentScan, ScrollFrame, SpyStrategy, VisibilityRatio};

// Uneven section heights, deterministic.
fn gen_sections(n: usize) -> Vec<SectionSample<usize>> {
    let mut out = Vec::with_capacity(n);
    let mut top = 0.0;
    for i in 0..n {
        let height = 300.0 + ((i * 7919) % 900) as f64;
        out.push(SectionSample::located(i, SectionBounds::new(top, height)));
        top += height;
    }
    out
}

fn gen_offsets(sections: &[SectionSample<usize>], count: usize) -> Vec<f64> {
    let end = sections
        .last()
        .and_then(|s| s.bounds)
        .map(|b| b.bottom())
        .unwrap_or(0.0);
    (0..count).map(|i| end * i as f64 / count as f64).collect()
}

fn bench_resolvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &n in &[6_usize, 64, 512] {
        let sections = gen_sections(n);
        let offsets = gen_offsets(&sections, 256);
        group.throughput(Throughput::Elements(offsets.len() as u64));

        let strategies = [
            ("containment", SpyStrategy::Containment(ContainmentScan::default())),
            ("visibility", SpyStrategy::Visibility(VisibilityRatio::default())),
        ];
        for (name, strategy) in strategies {
            group.bench_with_input(BenchmarkId::new(name, n), &sections, |b, sections| {
                b.iter(|| {
                    let mut acc = 0_usize;
                    for &offset in &offsets {
                        let frame = ScrollFrame::new(offset, 720.0);
                        acc += strategy.resolve(frame, black_box(sections)).unwrap_or(0);
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

// Sparse pages: half the sections have no element.
fn bench_missing_sections(c: &mut Criterion) {
    let mut sections = gen_sections(64);
    for s in sections.iter_mut().skip(1).step_by(2) {
        s.bounds = None;
    }
    let offsets = gen_offsets(&gen_sections(64), 256);
    let scan = ContainmentScan::default();
    c.bench_function("resolve/containment_sparse_64", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for &offset in &offsets {
                acc += scan
                    .resolve(ScrollFrame::new(offset, 720.0), black_box(&sections))
                    .unwrap_or(0);
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_resolvers, bench_missing_sections);
criterion_main!(benches);
