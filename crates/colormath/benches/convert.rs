use std::str::FromStr;

use colormath::{Color, ColorSpace, Gradient, HueInterpolation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INPUTS: [&str; 6] = [
    "#3178ea",
    "rgba(255, 202, 0, 0.5)",
    "hsl(210deg 80% 40%)",
    "oklch(0.7 0.19 35)",
    "lab(54.3 80.8 69.9)",
    "cornflowerblue",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("colormath");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = black_box(Color::from_str(black_box(input)));
            }
        })
    });

    let colors: Vec<Color> = INPUTS
        .iter()
        .filter_map(|input| Color::from_str(input).ok())
        .collect();

    group.bench_function("convert-to-oklch", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(color.to(ColorSpace::Oklch));
            }
        })
    });

    group.bench_function("to-hex-format", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(color.to_hex_format());
            }
        })
    });

    group.bench_function("gradient-20", |b| {
        b.iter(|| {
            Gradient::new(&colors, ColorSpace::Oklch, HueInterpolation::Shorter)
                .map(|gradient| black_box(gradient.samples(20)))
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
