//! Benchmarks for the backdrop compositing pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};

use backdrop::compose::{colorize, composite_overlay, process_background, BackgroundSettings};
use backdrop::types::{Opacity, TintColour};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn settings(opacity: i64) -> BackgroundSettings {
    BackgroundSettings {
        tint: TintColour::rgb(0x33, 0x66, 0xCC),
        opacity: Opacity::clamped(opacity),
        no_color: false,
    }
}

// -- Background processing --

fn bench_background(c: &mut Criterion) {
    let mut group = c.benchmark_group("background");

    let background = DynamicImage::ImageRgba8(gradient(1920, 1080));
    let shade = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1920, 1080, Rgba([0, 0, 0, 255])));
    let small_shade = DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 360, Rgba([0, 0, 0, 255])));

    group.bench_function("colorize_1080p", |b| {
        let rgba = background.to_rgba8();
        b.iter(|| colorize(black_box(&rgba), TintColour::rgb(255, 128, 0)))
    });

    group.bench_function("process_no_blend", |b| {
        b.iter(|| process_background(black_box(&background), &settings(0), None))
    });

    group.bench_function("process_with_shade", |b| {
        b.iter(|| process_background(black_box(&background), &settings(40), Some(&shade)))
    });

    // Shade must be resized to the background first
    group.bench_function("process_resized_shade", |b| {
        b.iter(|| process_background(black_box(&background), &settings(40), Some(&small_shade)))
    });

    group.finish();
}

// -- Overlay compositing --

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");

    let processed = process_background(
        &DynamicImage::ImageRgba8(gradient(1920, 1080)),
        &settings(40),
        None,
    );
    let overlay = RgbaImage::from_fn(1920, 1080, |x, _| Rgba([255, 255, 255, (x % 256) as u8]));
    let small_overlay = RgbaImage::from_pixel(480, 270, Rgba([255, 0, 0, 128]));

    group.bench_function("composite_same_size", |b| {
        b.iter(|| composite_overlay(black_box(&processed), Some(&overlay)))
    });

    group.bench_function("composite_resized", |b| {
        b.iter(|| composite_overlay(black_box(&processed), Some(&small_overlay)))
    });

    group.finish();
}

criterion_group!(benches, bench_background, bench_overlay);
criterion_main!(benches);
