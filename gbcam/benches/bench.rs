use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gbcam::{
    consts::{PHOTO_BYTES, PHOTO_PIXELS},
    decode::{decode_tiles, decode_tiles_to_slice},
    export::{export_raster, ExportFormat},
    montage::create_montage,
    palette::{apply_palette, apply_palette_into, rgb::RgbConfig, Palette, PaletteOrder},
    utils::LittleEndian,
    EffectKind, MontageLayout, Pipeline, Rgb565, Rgba8888,
};

/// Tile data that decodes to all four indices in a noisy pattern.
fn tiles(seed: u32) -> Vec<u8> {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    (0..PHOTO_BYTES)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(PHOTO_PIXELS as u64));

    let data = tiles(1);
    group.bench_function("slice", |b| {
        let mut output = vec![0; PHOTO_PIXELS];
        b.iter(|| decode_tiles_to_slice(&data, &mut output))
    });
    group.bench_function("plane", |b| b.iter(|| decode_tiles(&data)));
}

fn palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");
    group.throughput(Throughput::Elements(PHOTO_PIXELS as u64));

    let plane = decode_tiles(&tiles(2)).unwrap();
    let palette = Palette::default();

    group.bench_function("rgba8888 slice", |b| {
        let mut output = vec![[0; 4]; PHOTO_PIXELS];
        b.iter(|| {
            apply_palette_into::<Rgba8888, LittleEndian>(
                plane.pixels(),
                &palette,
                PaletteOrder::Normal,
                &mut output,
            )
        })
    });
    group.bench_function("rgb565 slice", |b| {
        let mut output = vec![0; PHOTO_PIXELS];
        b.iter(|| {
            apply_palette_into::<Rgb565, LittleEndian>(
                plane.pixels(),
                &palette,
                PaletteOrder::Inverted,
                &mut output,
            )
        })
    });
    group.bench_function("rgba8888 vec", |b| {
        b.iter(|| apply_palette(plane.pixels(), &palette, PaletteOrder::Normal))
    });
}

fn effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effect");
    group.throughput(Throughput::Elements(PHOTO_PIXELS as u64));

    let plane = decode_tiles(&tiles(3)).unwrap();
    for effect in EffectKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(effect), &plane, |b, plane| {
            b.iter(|| plane.with_effect(effect))
        });
    }
}

fn montages(c: &mut Criterion) {
    let mut group = c.benchmark_group("montage");

    let planes = (4..8)
        .map(|seed| decode_tiles(&tiles(seed)).unwrap())
        .collect::<Vec<_>>();
    for layout in MontageLayout::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(layout), &planes, |b, planes| {
            b.iter(|| create_montage(planes, layout))
        });
    }
}

fn pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let planes = (8..11)
        .map(|seed| decode_tiles(&tiles(seed)).unwrap())
        .collect::<Vec<_>>();

    let montage = Pipeline::montage(planes.clone(), MontageLayout::Border).effect(EffectKind::Zoom);
    group.bench_function("render montage", |b| b.iter(|| montage.render()));

    let rgb = Pipeline::rgb(
        planes[0].clone(),
        planes[1].clone(),
        planes[2].clone(),
        RgbConfig::new(0.1, 0.2),
    );
    group.bench_function("render rgb", |b| b.iter(|| rgb.render()));

    let rendered = montage.render().unwrap();
    for format in [ExportFormat::Png, ExportFormat::Jpeg] {
        group.bench_with_input(
            BenchmarkId::new("export", format),
            rendered.raster(),
            |b, raster| b.iter(|| export_raster(raster, None, format, None)),
        );
    }
}

criterion_group!(benches, decode, palette, effects, montages, pipeline);
criterion_main!(benches);
