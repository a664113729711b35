//! Benchmarks for cslider-track
//!
//! Measures performance of:
//! - Wrap planning across track lengths
//! - Ring rotation
//! - Slide set construction with duplication

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cslider_track::{OrderRing, SlideSet, StaticTrack, TrackLayout, WrapPlanner};

fn slide_set(count: usize) -> SlideSet {
    let mut host = StaticTrack::uniform(count, (100.0, 100.0), (25.0 * count as f64, 100.0));
    SlideSet::build(&mut host, TrackLayout::default()).expect("valid track")
}

/// Benchmark a half-track move at different slide counts
fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_plan");

    for &count in &[4usize, 16, 64, 256, 1024] {
        let slides = slide_set(count);
        let mut ring = OrderRing::identity(count);
        ring.recompute(0);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let planner = WrapPlanner::new(&slides, &ring);
            b.iter(|| planner.plan(black_box(0), black_box(n / 2)))
        });
    }
    group.finish();
}

/// Benchmark ring rotation for a full lap of next() moves
fn bench_ring_lap(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_lap");

    for &count in &[4usize, 64, 1024] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| {
                let mut ring = OrderRing::identity(n);
                for current in 0..n {
                    ring.recompute(black_box(current));
                }
                ring
            })
        });
    }
    group.finish();
}

/// Benchmark building a track that needs many duplication rounds
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_set_build");

    for &frame in &[400.0f64, 4_000.0, 40_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(frame), &frame, |b, &f| {
            b.iter(|| {
                let mut host = StaticTrack::uniform(3, (100.0, 100.0), (f, 100.0));
                SlideSet::build(&mut host, TrackLayout::default())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan, bench_ring_lap, bench_build);
criterion_main!(benches);
