use criterion::{black_box, criterion_group, criterion_main, Criterion};
use texel_format::{write_8unorm, write_float, Format, Rect};

fn criterion_benchmark(c: &mut Criterion) {
    texel_format::initialize();

    let rect = Rect::new(0, 0, 512, 512);
    let rgba = vec![0.5f32; 512 * 512 * 4];
    let rgba8 = vec![0x7fu8; 512 * 512 * 4];

    let mut bgra8 = vec![0u8; 512 * 512 * 4];
    c.bench_function("write_float B8G8R8A8_UNORM", |b| {
        b.iter(|| {
            write_float(
                black_box(Format::B8G8R8A8Unorm),
                &mut bgra8,
                512 * 4,
                black_box(&rgba),
                512 * 4,
                rect,
            )
        })
    });
    c.bench_function("write_float R8G8B8A8_SRGB", |b| {
        b.iter(|| {
            write_float(
                black_box(Format::R8G8B8A8Srgb),
                &mut bgra8,
                512 * 4,
                black_box(&rgba),
                512 * 4,
                rect,
            )
        })
    });
    c.bench_function("write_8unorm R8G8B8A8_UNORM", |b| {
        b.iter(|| {
            write_8unorm(
                black_box(Format::R8G8B8A8Unorm),
                &mut bgra8,
                512 * 4,
                black_box(&rgba8),
                512 * 4,
                rect,
            )
        })
    });

    let mut r10g10b10a2 = vec![0u8; 512 * 512 * 4];
    c.bench_function("write_float R10G10B10A2_UNORM", |b| {
        b.iter(|| {
            write_float(
                black_box(Format::R10G10B10A2Unorm),
                &mut r10g10b10a2,
                512 * 4,
                black_box(&rgba),
                512 * 4,
                rect,
            )
        })
    });

    let mut half = vec![0u8; 512 * 512 * 8];
    c.bench_function("write_float R16G16B16A16_FLOAT", |b| {
        b.iter(|| {
            write_float(
                black_box(Format::R16G16B16A16Float),
                &mut half,
                512 * 8,
                black_box(&rgba),
                512 * 4,
                rect,
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
