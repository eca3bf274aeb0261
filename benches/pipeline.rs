//! Benchmarks for the iconsheet pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use iconsheet::{encode_png, lua_table, GridLayout, Icon, Rasterizer, SheetPacker};

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512"><path d="M256 0L512 256L256 512L0 256Z"/><circle cx="256" cy="256" r="96"/></svg>"#;

fn make_icons(count: usize, size: u32) -> Vec<Icon> {
    (0..count)
        .map(|i| {
            Icon::new(
                format!("icon-{}", i),
                RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])),
            )
        })
        .collect()
}

// -- Layout benchmarks --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    group.bench_function("cells_2000", |b| {
        b.iter(|| {
            let layout = GridLayout::new(black_box(2000), 64, 32).unwrap();
            layout.cells().map(|cell| cell.coord().x).sum::<u32>()
        })
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let rasterizer = Rasterizer::new(64).unwrap();
    group.bench_function("rasterize_64", |b| {
        b.iter(|| rasterizer.rasterize(black_box(ICON.as_bytes())).unwrap())
    });

    let icons = make_icons(500, 64);
    let packer = SheetPacker::new(64, 32);
    group.bench_function("pack_500", |b| {
        b.iter(|| packer.pack(black_box(&icons), |_| {}).unwrap())
    });

    group.finish();
}

// -- Output benchmarks --

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let icons = make_icons(500, 64);
    let sheet = SheetPacker::new(64, 32).pack(&icons, |_| {}).unwrap();

    group.bench_function("lua_table_500", |b| {
        b.iter(|| lua_table(black_box(&sheet.table)))
    });

    group.sample_size(10);
    group.bench_function("encode_png_500", |b| {
        b.iter(|| encode_png(black_box(&sheet.image)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_rendering, bench_output);
criterion_main!(benches);
