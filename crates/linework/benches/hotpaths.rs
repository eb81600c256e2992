use criterion::{black_box, criterion_group, criterion_main, Criterion};

use linework::{
    extract_contours, normalize_thickness, smooth_contour, vectorize, ExtractConfig, Mask,
    NormalizeConfig, SmoothConfig, VectorizeConfig,
};

/// Closed stroke whose half-width swings around the ring, forcing the
/// normalizer through its full skeleton/redraw cycle.
fn make_stroke_fixture(size: u32, radius: f64, min_half: f64, max_half: f64) -> Mask {
    let c = size as f64 / 2.0;
    Mask::from_fn(size, size, |x, y| {
        let dx = x as f64 - c;
        let dy = y as f64 - c;
        let d = (dx * dx + dy * dy).sqrt();
        let half = min_half + (max_half - min_half) * (1.0 + dy.atan2(dx).cos()) / 2.0;
        (d - radius).abs() <= half
    })
}

/// Three concentric uniform strokes, a multi-contour tracing workload.
fn make_rings_fixture(size: u32) -> Mask {
    let c = size as f64 / 2.0;
    Mask::from_fn(size, size, |x, y| {
        let d = ((x as f64 - c).powi(2) + (y as f64 - c).powi(2)).sqrt();
        [100.0, 130.0, 160.0].iter().any(|r| (d - r).abs() <= 3.0)
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mask = make_stroke_fixture(512, 160.0, 1.0, 6.0);
    let cfg = NormalizeConfig::default();

    c.bench_function("normalize_512_variable_ring", |b| {
        b.iter(|| {
            let out = normalize_thickness(black_box(&mask), black_box(&cfg));
            black_box(out.count_foreground())
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let mask = make_rings_fixture(512);
    let normalized = normalize_thickness(&mask, &NormalizeConfig::default());
    let cfg = ExtractConfig::default();

    c.bench_function("extract_512_three_rings", |b| {
        b.iter(|| {
            let contours = extract_contours(black_box(&normalized), black_box(&cfg));
            black_box(contours.len())
        })
    });
}

fn bench_smooth(c: &mut Criterion) {
    let mask = make_rings_fixture(512);
    let contours = extract_contours(&mask, &ExtractConfig::default());
    let longest = contours
        .iter()
        .max_by_key(|contour| contour.len())
        .expect("fixture produces contours")
        .clone();
    let cfg = SmoothConfig::default();

    c.bench_function("smooth_longest_ring", |b| {
        b.iter(|| {
            let out = smooth_contour(black_box(&longest), black_box(&cfg));
            black_box(out.len())
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mask = make_stroke_fixture(512, 160.0, 1.0, 6.0);
    let cfg = VectorizeConfig::default();

    c.bench_function("vectorize_512_variable_ring", |b| {
        b.iter(|| {
            let result = vectorize(black_box(&mask), black_box(&cfg));
            black_box(result.outlines.len())
        })
    });
}

criterion_group!(
    hotpaths,
    bench_normalize,
    bench_extract,
    bench_smooth,
    bench_full_pipeline
);
criterion_main!(hotpaths);
