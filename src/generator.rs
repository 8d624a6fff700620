// src/generator.rs

use glam::Vec2;
use rand::Rng;

use crate::geometry::{Circle, ConvexPolygon};

const MIN_RADIUS: f32 = 1e-6;

pub struct PolygonGenerator;

impl PolygonGenerator {
    pub fn generate_convex_polygon<const N: usize>(
        center: Vec2,
        avg_radius: f32,
        num_vertices: usize,
    ) -> ConvexPolygon<N> {
        Self::generate_convex_polygon_with(&mut rand::thread_rng(), center, avg_radius, num_vertices)
    }

    /// Clockwise polygon inscribed in a circle, with jittered vertex angles.
    /// All vertices share one radius, so the result is always convex.
    /// Radii below `MIN_RADIUS` (including negative ones) are raised to it.
    pub fn generate_convex_polygon_with<const N: usize>(
        rng: &mut impl Rng,
        center: Vec2,
        avg_radius: f32,
        num_vertices: usize,
    ) -> ConvexPolygon<N> {
        let num_vertices = num_vertices.clamp(3, N.max(3));
        let avg_radius = avg_radius.max(MIN_RADIUS);
        let step = std::f32::consts::TAU / num_vertices as f32;
        let max_perturbation = step * 0.3;
        let radius = rng.gen_range(avg_radius * 0.8..avg_radius * 1.2);
        let phase = rng.gen_range(0.0..std::f32::consts::TAU);

        let mut points = [Vec2::ZERO; N];
        for (i, point) in points.iter_mut().take(num_vertices).enumerate() {
            let perturbation = rng.gen_range(-max_perturbation..max_perturbation);
            // Decreasing angles give clockwise winding.
            let angle = phase - (i as f32) * step + perturbation;
            *point = center + Vec2::from_angle(angle) * radius;
        }

        ConvexPolygon::new(&points[..num_vertices.min(N)])
    }

    pub fn generate_circle_with(rng: &mut impl Rng, center: Vec2, avg_radius: f32) -> Circle {
        let avg_radius = avg_radius.max(MIN_RADIUS);
        Circle::new(center, rng.gen_range(avg_radius * 0.5..avg_radius * 1.5))
    }
}
