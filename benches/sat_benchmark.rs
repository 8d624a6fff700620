// benches/sat_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::Vec2;
use rand::Rng;
use sat2d::generator::PolygonGenerator;
use sat2d::{Circle, ConvexPolygon, Manifold, SatTest, MAX_VERTICES};

fn create_test_pair(rng: &mut impl Rng) -> (ConvexPolygon, ConvexPolygon) {
    let vertices1 = rng.gen_range(3..=MAX_VERTICES);
    let radius1 = rng.gen_range(60.0..100.0);
    let poly1 = PolygonGenerator::generate_convex_polygon_with(rng, Vec2::ZERO, radius1, vertices1);

    let vertices2 = rng.gen_range(3..=MAX_VERTICES);
    let radius2 = rng.gen_range(60.0..100.0);
    let poly2 = PolygonGenerator::generate_convex_polygon_with(rng, Vec2::new(50.0, 0.0), radius2, vertices2); // Slightly offset
    (poly1, poly2)
}

fn sat_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_PAIRS: usize = 100;
    let pairs: Vec<(ConvexPolygon, ConvexPolygon)> =
        (0..NUM_BENCH_PAIRS).map(|_| create_test_pair(&mut rng)).collect();
    let circles: Vec<Circle> = (0..NUM_BENCH_PAIRS)
        .map(|_| {
            let center = Vec2::new(rng.gen_range(0.0..120.0), 0.0);
            PolygonGenerator::generate_circle_with(&mut rng, center, 40.0)
        })
        .collect();

    let mut group = c.benchmark_group("SatOperations");

    group.bench_function("poly_poly_100_pairs_bool", |b| {
        let mut pair_iter = pairs.iter().cycle();
        b.iter(|| {
            let (poly1, poly2) = pair_iter.next().unwrap();
            SatTest::poly_poly(black_box(poly1), black_box(poly2), None)
        })
    });

    group.bench_function("poly_poly_100_pairs_manifold", |b| {
        let mut manifold = Manifold::new();
        let mut pair_iter = pairs.iter().cycle();
        b.iter(|| {
            let (poly1, poly2) = pair_iter.next().unwrap();
            SatTest::poly_poly(black_box(poly1), black_box(poly2), Some(black_box(&mut manifold)))
        })
    });

    group.bench_function("poly_circle_100_pairs_manifold", |b| {
        let mut manifold = Manifold::new();
        let mut pair_iter = pairs.iter().zip(circles.iter()).cycle();
        b.iter(|| {
            let ((poly, _), circle) = pair_iter.next().unwrap();
            SatTest::poly_circle(black_box(poly), black_box(circle), Some(black_box(&mut manifold)))
        })
    });
    group.finish();
}

criterion_group!(benches, sat_benchmark_fn);
criterion_main!(benches);
