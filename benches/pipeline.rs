//! Benchmarks for the pxgrid pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use image::{Rgb, RgbImage};
use pxgrid::{render_html, render_raster, select_background, Colour, Sampler};

/// Mostly-flat field with a sparse band of varied colour, so the
/// background-skip path dominates like it does on real inputs.
fn synthetic_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x + y) % 7 == 0 {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        } else {
            Rgb([32, 48, 64])
        }
    })
}

// -- Sampling benchmarks --

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    let image = synthetic_image(640, 480);

    group.bench_function("samples_stride_1", |b| {
        b.iter(|| {
            let sampler = Sampler::new(black_box(&image), 1, 1).unwrap();
            sampler.samples().count()
        })
    });

    group.bench_function("samples_stride_8", |b| {
        b.iter(|| {
            let sampler = Sampler::new(black_box(&image), 8, 8).unwrap();
            sampler.samples().count()
        })
    });

    group.finish();
}

// -- Background selection benchmarks --

fn bench_background(c: &mut Criterion) {
    let mut group = c.benchmark_group("background");

    let image = synthetic_image(640, 480);
    let sampler = Sampler::new(&image, 4, 4).unwrap();

    group.bench_function("select_background", |b| {
        b.iter(|| select_background(black_box(&sampler).samples().map(|s| s.colour)).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let image = synthetic_image(640, 480);
    let sampler = Sampler::new(&image, 8, 8).unwrap();
    let background = Colour::rgb(32, 48, 64);

    group.bench_function("render_html", |b| {
        b.iter(|| render_html(black_box(&sampler), 4, background).unwrap())
    });

    group.bench_function("render_raster", |b| {
        b.iter(|| render_raster(black_box(&sampler), 4, background).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_background, bench_rendering);
criterion_main!(benches);
