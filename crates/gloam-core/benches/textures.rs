//! Texture factory benchmarks.
//!
//! The factory runs on session build, once per room, so these are
//! build-latency numbers rather than frame numbers. Scale 1.0 matches
//! the High tier.

use criterion::{criterion_group, criterion_main, Criterion};

use gloam_core::textures::TextureFactory;
use gloam_logic::content::ManorContent;

fn bench_sheets(c: &mut Criterion) {
    let factory = TextureFactory::new(1.0);
    c.bench_function("wallpaper", |b| b.iter(|| factory.wallpaper()));
    c.bench_function("brick_with_bump", |b| b.iter(|| factory.brick()));
    c.bench_function("planks", |b| b.iter(|| factory.planks()));
    c.bench_function("metal_panel", |b| b.iter(|| factory.metal_panel()));
}

fn bench_lettered(c: &mut Criterion) {
    let factory = TextureFactory::new(1.0);
    let content = ManorContent::default();
    c.bench_function("slide", |b| {
        b.iter(|| factory.slide(&content.archive[0], &content.archive_panel.accent, 0, 3))
    });
    c.bench_function("hologram", |b| {
        b.iter(|| factory.hologram(&content.vault[0], &content.vault_panel.accent, 0, 2))
    });
    c.bench_function("front_door", |b| {
        b.iter(|| factory.front_door(&content.resident.title, "IS INSIDE THE HOUSE.", "COME ON IN."))
    });
}

fn bench_tier_scaling(c: &mut Criterion) {
    for (name, scale) in [("low", 0.25f32), ("medium", 0.5), ("high", 1.0)] {
        let factory = TextureFactory::new(scale);
        c.bench_function(&format!("stone_{}", name), |b| b.iter(|| factory.stone()));
    }
}

criterion_group!(textures, bench_sheets, bench_lettered, bench_tier_scaling);
criterion_main!(textures);
