use criterion::{black_box, criterion_group, criterion_main, Criterion};

use identicon::{Config, Digest, Hue, Identicon};

fn bench_generate_default(c: &mut Criterion) {
    c.bench_function("generate_default", |b| {
        b.iter(|| identicon::generate_default(black_box("alice@example.com")).unwrap())
    });
}

fn bench_stages(c: &mut Criterion) {
    let config = Config::default().with_hue(Hue::Fixed(210));

    c.bench_function("digest", |b| b.iter(|| Digest::of(black_box("alice@example.com"))));

    c.bench_function("compose", |b| {
        b.iter(|| Identicon::with_config(black_box("alice@example.com"), &config).unwrap())
    });

    let icon = Identicon::with_config("alice@example.com", &config).unwrap();
    c.bench_function("serialize", |b| b.iter(|| icon.svg().unwrap()));
}

fn bench_generate_many(c: &mut Criterion) {
    let ids: Vec<String> = (0..256).map(|i| format!("user{}", i)).collect();
    let config = Config::default();
    c.bench_function("generate_many_256", |b| {
        b.iter(|| identicon::generate_many(black_box(&ids), &config).unwrap())
    });
}

criterion_group!(benches, bench_generate_default, bench_stages, bench_generate_many);
criterion_main!(benches);
