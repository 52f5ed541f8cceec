//! Benchmarks for platform detection and offline classification.
//!
//! Run with: `cargo bench --bench classify_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkstash::classify::keywords::classify_offline;
use linkstash::{detect, Classifier, ClassifyInput, Platform};

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

const URLS: &[&str] = &[
    "https://www.instagram.com/reel/Cx7yZ1qLk9W/",
    "https://instagram.com/p/ABC123xyz",
    "https://x.com/rustlang/status/1790000000000000000",
    "https://twitter.com/naval/status/1002103360646823936",
    "https://youtu.be/dQw4w9WgXcQ",
    "https://www.youtube.com/watch?v=ABC123",
    "https://blog.example.com/how-to-bake-bread",
    "https://medium.com/@user/article-title-123abc",
];

const CAPTIONS: &[(&str, Platform)] = &[
    ("5 minute leg workout for beginners #fitness #legday", Platform::Instagram),
    ("Creamy garlic butter pasta in 15 minutes #pasta #dinner", Platform::Instagram),
    ("Read what you love until you love to read.", Platform::Twitter),
    ("Zero cost abstractions in Rust: how iterators compile down", Platform::Article),
    ("", Platform::Article),
];

fn long_caption() -> String {
    "Sunset hike along the coast with friends, packing light for a weekend trip "
        .repeat(40)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_detect(c: &mut Criterion) {
    c.bench_function("detect/mixed_urls", |b| {
        b.iter(|| {
            for url in URLS {
                black_box(detect(black_box(url)));
            }
        });
    });
}

fn bench_classify_offline(c: &mut Criterion) {
    c.bench_function("classify_offline/short_captions", |b| {
        b.iter(|| {
            for (caption, platform) in CAPTIONS {
                black_box(classify_offline(black_box(caption), *platform, ""));
            }
        });
    });

    let long = long_caption();
    c.bench_function("classify_offline/long_caption", |b| {
        b.iter(|| black_box(classify_offline(black_box(&long), Platform::Instagram, "")));
    });
}

fn bench_classifier_chain(c: &mut Criterion) {
    let classifier = Classifier::offline();
    let input = ClassifyInput {
        caption: CAPTIONS[0].0.to_string(),
        platform: Platform::Instagram,
        ..Default::default()
    };

    c.bench_function("classifier/offline_chain", |b| {
        b.iter(|| black_box(tokio_test::block_on(classifier.classify(black_box(&input)))));
    });
}

criterion_group!(
    benches,
    bench_detect,
    bench_classify_offline,
    bench_classifier_chain
);
criterion_main!(benches);
