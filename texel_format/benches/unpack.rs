use criterion::{black_box, criterion_group, criterion_main, Criterion};
use texel_format::{read_8unorm, read_float, Format, Rect};

fn criterion_benchmark(c: &mut Criterion) {
    texel_format::initialize();

    let rect = Rect::new(0, 0, 512, 512);
    let mut rgba = vec![0.0f32; 512 * 512 * 4];
    let mut rgba8 = vec![0u8; 512 * 512 * 4];

    let bgra8 = vec![0x7fu8; 512 * 512 * 4];
    c.bench_function("read_float B8G8R8A8_UNORM", |b| {
        b.iter(|| {
            read_float(
                black_box(Format::B8G8R8A8Unorm),
                &mut rgba,
                512 * 4,
                black_box(&bgra8),
                512 * 4,
                rect,
            )
        })
    });
    c.bench_function("read_8unorm B8G8R8A8_SRGB", |b| {
        b.iter(|| {
            read_8unorm(
                black_box(Format::B8G8R8A8Srgb),
                &mut rgba8,
                512 * 4,
                black_box(&bgra8),
                512 * 4,
                rect,
            )
        })
    });

    let b5g6r5 = vec![0x5au8; 512 * 512 * 2];
    c.bench_function("read_float B5G6R5_UNORM", |b| {
        b.iter(|| {
            read_float(
                black_box(Format::B5G6R5Unorm),
                &mut rgba,
                512 * 4,
                black_box(&b5g6r5),
                512 * 2,
                rect,
            )
        })
    });

    let half = vec![0x3cu8; 512 * 512 * 8];
    c.bench_function("read_float R16G16B16A16_FLOAT", |b| {
        b.iter(|| {
            read_float(
                black_box(Format::R16G16B16A16Float),
                &mut rgba,
                512 * 4,
                black_box(&half),
                512 * 8,
                rect,
            )
        })
    });

    let z24s8 = vec![0xffu8; 512 * 512 * 4];
    let mut depth = vec![0.0f32; 512 * 512];
    let z = texel_format::lookup(Format::Z24UnormS8Uscaled)
        .depth()
        .unwrap();
    c.bench_function("unpack_z_float Z24_UNORM_S8_USCALED", |b| {
        b.iter(|| z.unpack_z_float(&mut depth, 512, black_box(&z24s8), 512 * 4, 512, 512))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
