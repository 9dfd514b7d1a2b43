// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery controller operations.
//!
//! Measures the performance of:
//! - Filtering (recomputing the visible set and re-rendering cards)
//! - Lightbox navigation (step with wraparound and neighbor preload)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::application::GalleryController;
use iced_gallery::domain::gallery::{Category, CategoryFilter, ItemIndex};
use iced_gallery::test_utils::{sample_items, RecordingSurface};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["nature", "city", "people", "abstract"];

/// Builds a gallery of `count` items cycling through four categories.
fn gallery(count: usize) -> GalleryController<RecordingSurface> {
    let categories: Vec<&str> = CATEGORIES.iter().copied().cycle().take(count).collect();
    GalleryController::new(sample_items(&categories), RecordingSurface::default())
}

/// Benchmark switching between a category filter and "All".
fn bench_apply_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");

    for count in [12_usize, 120, 1200] {
        group.bench_with_input(BenchmarkId::new("apply_filter", count), &count, |b, &n| {
            let mut controller = gallery(n);
            let nature = CategoryFilter::Only(Category::new("nature"));
            b.iter(|| {
                controller.apply_filter(black_box(nature.clone()));
                controller.apply_filter(black_box(CategoryFilter::All));
                controller.surface_mut().clear_log();
            });
        });
    }

    group.finish();
}

/// Benchmark stepping through the visible set while the viewer is open.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for count in [12_usize, 120, 1200] {
        group.bench_with_input(BenchmarkId::new("step_next", count), &count, |b, &n| {
            let mut controller = gallery(n);
            controller.open(ItemIndex::new(0));
            b.iter(|| {
                black_box(controller.step(black_box(1)));
                controller.surface_mut().clear_log();
            });
        });

        group.bench_with_input(
            BenchmarkId::new("step_filtered", count),
            &count,
            |b, &n| {
                let mut controller = gallery(n);
                controller.apply_filter(CategoryFilter::Only(Category::new("city")));
                controller.open(ItemIndex::new(1));
                b.iter(|| {
                    black_box(controller.step(black_box(-3)));
                    controller.surface_mut().clear_log();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply_filter, bench_step);
criterion_main!(benches);
