use colormath::Color;
use colors_mcp::contrast::check;
use colors_mcp::tools::Toolbox;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

const FOREGROUNDS: [&str; 4] = ["#000000", "#333", "rgba(0, 0, 0, 0.6)", "oklch(0.4 0.1 250)"];
const BACKGROUNDS: [&str; 4] = ["#ffffff", "#f5f5dc", "rgba(255, 255, 255, 0.5)", "navy"];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    let white = Color::srgb(1.0, 1.0, 1.0);
    let foregrounds: Vec<Color> = FOREGROUNDS
        .iter()
        .filter_map(|input| input.parse().ok())
        .collect();
    let backgrounds: Vec<Color> = BACKGROUNDS
        .iter()
        .filter_map(|input| input.parse().ok())
        .collect();

    group.bench_function("check-4x4", |b| {
        b.iter(|| {
            for foreground in &foregrounds {
                for background in &backgrounds {
                    black_box(check(foreground, background, &white));
                }
            }
        })
    });

    let toolbox: Toolbox = Toolbox::default();
    let arguments = json!({ "foregrounds": FOREGROUNDS, "backgrounds": BACKGROUNDS });

    group.bench_function("batch-contrast-tool", |b| {
        b.iter(|| {
            let _ = black_box(toolbox.call("colors_batch_contrast", black_box(arguments.clone())));
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
