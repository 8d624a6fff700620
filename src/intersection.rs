// src/intersection.rs

use glam::Vec2;

use crate::geometry::{Circle, ConvexPolygon};
use crate::manifold::Manifold;
use crate::projection::{axis_overlap, support};
use crate::voronoi::VoronoiRegion;

/// Separating axis tests between circles and convex polygons.
///
/// Every test returns whether the shapes intersect. When a manifold is
/// supplied it is reset on entry and, on intersection, holds the axis of
/// least penetration with the normal pointing from the first argument
/// toward the second.
pub struct SatTest;

impl SatTest {
    /// True when one of `pa`'s edge normals separates `pb` from it.
    /// An empty `pb` has no support point and is never separated.
    pub fn is_axis_separating<const N: usize, const M: usize>(
        pa: &ConvexPolygon<N>,
        pb: &ConvexPolygon<M>,
    ) -> bool {
        if pb.count() == 0 {
            return false;
        }

        for (vertex, &n) in pa.vertices().iter().zip(pa.normals()) {
            let c = vertex.dot(n);
            let index = support(pb, -n);
            let d = pb.vertices()[index].dot(n) - c;

            if d >= 0.0 {
                log::trace!("separating axis {:?} (gap {})", n, d);
                return true;
            }
        }

        false
    }

    pub fn poly_poly<const N: usize, const M: usize>(
        p1: &ConvexPolygon<N>,
        p2: &ConvexPolygon<M>,
        mut manifold: Option<&mut Manifold>,
    ) -> bool {
        if let Some(m) = manifold.as_deref_mut() {
            m.reset();
        }

        if Self::is_axis_separating(p1, p2) || Self::is_axis_separating(p2, p1) {
            return false;
        }

        if let Some(m) = manifold {
            for &axis in p1.normals().iter().chain(p2.normals()) {
                m.update(axis, axis_overlap(p1, p2, axis));
            }
        }

        true
    }

    pub fn poly_circle<const N: usize>(
        p: &ConvexPolygon<N>,
        c: &Circle,
        mut manifold: Option<&mut Manifold>,
    ) -> bool {
        if let Some(m) = manifold.as_deref_mut() {
            m.reset();
        }

        let radius2 = c.radius * c.radius;
        let vertices = p.vertices();
        let edges = p.edges();
        let normals = p.normals();
        let count = p.count();

        for i in 0..count {
            let next = if i + 1 == count { 0 } else { i + 1 };
            let prev = if i == 0 { count - 1 } else { i - 1 };

            let point = c.position - vertices[i];

            // Offset from the polygon corner owning the circle center, if any.
            let corner = match VoronoiRegion::classify(point, edges[i]) {
                VoronoiRegion::Left => {
                    let from_prev = c.position - vertices[prev];
                    (VoronoiRegion::classify(from_prev, edges[prev]) == VoronoiRegion::Right)
                        .then_some(point)
                }
                VoronoiRegion::Right => {
                    let from_next = c.position - vertices[next];
                    (VoronoiRegion::classify(from_next, edges[next]) == VoronoiRegion::Left)
                        .then_some(from_next)
                }
                VoronoiRegion::Middle => None,
            };

            match corner {
                Some(offset) => {
                    let dist2 = offset.length_squared();
                    if dist2 > radius2 {
                        log::trace!("circle {:?} clear of corner by {}", c, dist2.sqrt() - c.radius);
                        return false;
                    }

                    if let Some(m) = manifold.as_deref_mut() {
                        m.update(offset.normalize_or_zero(), c.radius - dist2.sqrt());
                    }
                }
                None => {
                    let normal = normals[i];
                    let diff = normal.dot(point);
                    if diff > 0.0 && diff.abs() > c.radius {
                        log::trace!("circle {:?} clear of edge {} by {}", c, i, diff - c.radius);
                        return false;
                    }

                    if let Some(m) = manifold.as_deref_mut() {
                        m.update(normal, c.radius - diff);
                    }
                }
            }
        }

        true
    }

    pub fn circle_poly<const N: usize>(
        c: &Circle,
        p: &ConvexPolygon<N>,
        manifold: Option<&mut Manifold>,
    ) -> bool {
        match manifold {
            Some(m) => {
                let hit = Self::poly_circle(p, c, Some(&mut *m));
                *m = m.flipped();
                hit
            }
            None => Self::poly_circle(p, c, None),
        }
    }

    /// Closed form. Concentric circles report `Vec2::X` as their normal.
    pub fn circle_circle(c1: &Circle, c2: &Circle, mut manifold: Option<&mut Manifold>) -> bool {
        if let Some(m) = manifold.as_deref_mut() {
            m.reset();
        }

        let delta = c2.position - c1.position;
        let radii = c1.radius + c2.radius;
        let dist2 = delta.length_squared();

        if dist2 > radii * radii {
            return false;
        }

        if let Some(m) = manifold {
            let dist = dist2.sqrt();
            m.normal = if dist > 0.0 { delta / dist } else { Vec2::X };
            m.overlap = radii - dist;
        }

        true
    }
}
