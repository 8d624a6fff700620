// src/projection.rs

use glam::Vec2;

use crate::geometry::ConvexPolygon;

/// Interval `(min, max)` covered by the polygon's vertices projected on `axis`.
pub fn axis_range<const N: usize>(poly: &ConvexPolygon<N>, axis: Vec2) -> (f32, f32) {
    let vertices = poly.vertices();
    let first = vertices.first().map_or(0.0, |v| v.dot(axis));

    vertices.iter().skip(1).fold((first, first), |(min, max), v| {
        let dot = v.dot(axis);
        (min.min(dot), max.max(dot))
    })
}

/// Signed overlap of the two projections on `axis`, or `0.0` when they are disjoint.
///
/// Positive: `p2` lies toward `+axis` from `p1`. Negative: toward `-axis`.
/// The magnitude is the smaller of the two ways to push the intervals apart.
pub fn axis_overlap<const N: usize, const M: usize>(
    p1: &ConvexPolygon<N>,
    p2: &ConvexPolygon<M>,
    axis: Vec2,
) -> f32 {
    let (min1, max1) = axis_range(p1, axis);
    let (min2, max2) = axis_range(p2, axis);

    if max1 < min2 || max2 < min1 {
        return 0.0;
    }

    let overlap1 = max1 - min2;
    let overlap2 = max2 - min1;

    if overlap2 > overlap1 {
        overlap1
    } else {
        -overlap2
    }
}

/// Index of the vertex furthest along `dir`. The first one wins ties.
pub fn support<const N: usize>(poly: &ConvexPolygon<N>, dir: Vec2) -> usize {
    let mut max_index = 0;
    let mut max_dot = f32::MIN;

    for (i, vertex) in poly.vertices().iter().enumerate() {
        let dot = vertex.dot(dir);
        if dot > max_dot {
            max_index = i;
            max_dot = dot;
        }
    }

    max_index
}
