use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecosort::{perceptual_hash, preprocess, Category, InputSpec, KnownImageIndex, LocalizationStore};
use image::{Rgb, RgbImage};

fn photo(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8]))
}

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Perceptual Hash");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    for (label, width, height) in [("small", 224, 224), ("camera", 1280, 960)] {
        let image = photo(width, height);
        group.bench_function(label, |b| b.iter(|| perceptual_hash(black_box(&image))));
    }

    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("Preprocess");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let spec = InputSpec::default();
    let image = photo(1280, 960);
    group.bench_function("resize_and_normalize", |b| {
        b.iter(|| preprocess(black_box(&image), &spec).unwrap())
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lookup");

    let mut index = KnownImageIndex::new();
    for i in 0..1000u32 {
        index.insert(format!("hash-{}", i), Category::from_index(i as usize % Category::COUNT).unwrap());
    }
    group.bench_function("index_hit", |b| b.iter(|| index.lookup(black_box("hash-512"))));
    group.bench_function("index_miss", |b| b.iter(|| index.lookup(black_box("absent"))));

    let store = LocalizationStore::builtin();
    group.bench_function("localization", |b| {
        b.iter(|| store.lookup(black_box("hi"), black_box(Category::LithiumBattery)))
    });

    group.finish();
}

criterion_group!(benches, bench_hashing, bench_preprocess, bench_lookup);
criterion_main!(benches);
