// src/main.rs

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sat2d::generator::PolygonGenerator;
use sat2d::{Shape, MAX_VERTICES};

const DEFAULT_PAIRS: usize = 16;
const DEFAULT_SEED: u64 = 1;

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("invalid {} {:?}, using default", name, raw);
            default
        }),
        None => default,
    }
}

fn random_shape(rng: &mut StdRng) -> Shape {
    let center = Vec2::new(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0));
    if rng.gen_bool(0.3) {
        PolygonGenerator::generate_circle_with(rng, center, 1.5).into()
    } else {
        let num_vertices = rng.gen_range(3..=MAX_VERTICES);
        Shape::Polygon(PolygonGenerator::generate_convex_polygon_with(rng, center, 2.0, num_vertices))
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pairs = parse_arg(args.next(), "pair count", DEFAULT_PAIRS);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut hits = 0;

    for i in 0..pairs {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);

        match a.contact(&b) {
            Some(manifold) => {
                hits += 1;
                log::info!(
                    "pair {}: intersecting, normal ({:.3}, {:.3}) depth {:.3}",
                    i,
                    manifold.normal.x,
                    manifold.normal.y,
                    manifold.overlap
                );
            }
            None => log::info!("pair {}: separated", i),
        }
        log::debug!("pair {}: {:?} vs {:?}", i, a, b);
    }

    log::info!("{} of {} pairs intersect (seed {})", hits, pairs, seed);
}
