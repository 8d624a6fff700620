// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use thiserror::Error;

/// Default vertex capacity of a [`ConvexPolygon`].
pub const MAX_VERTICES: usize = 8;

const CONVEXITY_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("polygon has {count} vertices, needs at least 3")]
    TooFewVertices { count: usize },
    #[error("polygon has {count} vertices but capacity is {capacity}")]
    TooManyVertices { count: usize, capacity: usize },
    #[error("edge {index} has zero length")]
    DegenerateEdge { index: usize },
    #[error("polygon has zero area")]
    ZeroArea,
    #[error("polygon is not convex")]
    NotConvex,
    #[error("polygon is wound counter-clockwise, expected clockwise")]
    CounterClockwise,
}

/// Axis-aligned box given by its minimum corner and its extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pos: Vec2,
    size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { pos: min, size: max - min }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min().cmple(other.max()).all() && other.min().cmple(self.max()).all()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
}

impl Circle {
    /// No validation: a negative radius gives meaningless test results.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.position + offset, self.radius)
    }

    pub fn aabb(&self) -> Aabb {
        let extent = Vec2::splat(self.radius);
        Aabb::from_min_max(self.position - extent, self.position + extent)
    }
}

/// Convex polygon stored inline, with edges and outward normals derived from the vertices.
///
/// Vertices are expected in clockwise order (y axis up). With that winding
/// `edge.perp()` points out of the polygon. Neither winding nor convexity is
/// checked by [`ConvexPolygon::new`]; use [`ConvexPolygon::try_new`] for that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexPolygon<const N: usize = MAX_VERTICES> {
    vertices: [Vec2; N],
    edges: [Vec2; N],
    normals: [Vec2; N],
    count: usize,
}

impl<const N: usize> ConvexPolygon<N> {
    /// Builds a polygon from `points`. Supplying more than `N` points is a
    /// contract violation: it asserts in debug builds and truncates otherwise.
    pub fn new(points: &[Vec2]) -> Self {
        let mut polygon = Self {
            vertices: [Vec2::ZERO; N],
            edges: [Vec2::ZERO; N],
            normals: [Vec2::ZERO; N],
            count: 0,
        };
        polygon.set_vertices(points);
        polygon
    }

    pub fn try_new(points: &[Vec2]) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            log::debug!("rejecting polygon with {} vertices", points.len());
            return Err(ShapeError::TooFewVertices { count: points.len() });
        }
        if points.len() > N {
            log::debug!("rejecting polygon with {} vertices (capacity {})", points.len(), N);
            return Err(ShapeError::TooManyVertices {
                count: points.len(),
                capacity: N,
            });
        }

        let polygon = Self::new(points);
        if let Some(index) = polygon
            .edges()
            .iter()
            .position(|edge| edge.length_squared() <= CONVEXITY_EPSILON)
        {
            log::debug!("rejecting polygon with zero-length edge {}", index);
            return Err(ShapeError::DegenerateEdge { index });
        }
        if !polygon.is_convex() {
            log::debug!("rejecting non-convex polygon {:?}", polygon.vertices());
            return Err(ShapeError::NotConvex);
        }
        let area = polygon.signed_area();
        if area.abs() <= CONVEXITY_EPSILON {
            log::debug!("rejecting flat polygon {:?}", polygon.vertices());
            return Err(ShapeError::ZeroArea);
        }
        if area > 0.0 {
            log::debug!("rejecting counter-clockwise polygon {:?}", polygon.vertices());
            return Err(ShapeError::CounterClockwise);
        }
        Ok(polygon)
    }

    /// Box corners in the order bottom-left, top-left, top-right, bottom-right.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let pos = aabb.pos();
        let size = aabb.size();

        Self::new(&[
            Vec2::new(pos.x, pos.y),
            Vec2::new(pos.x, pos.y + size.y),
            Vec2::new(pos.x + size.x, pos.y + size.y),
            Vec2::new(pos.x + size.x, pos.y),
        ])
    }

    /// Replaces the vertices and recomputes edges and normals.
    pub fn set_vertices(&mut self, points: &[Vec2]) {
        debug_assert!(
            points.len() <= N,
            "polygon has {} vertices, capacity is {}",
            points.len(),
            N
        );

        let count = points.len().min(N);
        self.vertices[..count].copy_from_slice(&points[..count]);
        self.count = count;

        for i in 0..count {
            let next = if i + 1 == count { 0 } else { i + 1 };
            let edge = self.vertices[next] - self.vertices[i];
            self.edges[i] = edge;
            // Degenerate (zero-length) edges yield a zero normal instead of NaN.
            self.normals[i] = edge.perp().normalize_or_zero();
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices[..self.count]
    }

    pub fn edges(&self) -> &[Vec2] {
        &self.edges[..self.count]
    }

    pub fn normals(&self) -> &[Vec2] {
        &self.normals[..self.count]
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        let mut moved = *self;
        for vertex in &mut moved.vertices[..moved.count] {
            *vertex += offset;
        }
        moved
    }

    /// Shoelace area, negative for clockwise winding.
    pub fn signed_area(&self) -> f32 {
        if self.count < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..self.count {
            let j = (i + 1) % self.count;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area / 2.0
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// True when every corner turns the same way. Collinear corners are accepted.
    pub fn is_convex(&self) -> bool {
        let edges = self.edges();
        let mut turn = 0.0f32;
        for i in 0..edges.len() {
            let cross = edges[i].perp_dot(edges[(i + 1) % edges.len()]);
            if cross.abs() <= CONVEXITY_EPSILON {
                continue;
            }
            if turn == 0.0 {
                turn = cross.signum();
            } else if cross.signum() != turn {
                return false;
            }
        }
        true
    }

    pub fn aabb(&self) -> Aabb {
        let vertices = self.vertices();
        let Some(&first) = vertices.first() else {
            return Aabb::default();
        };
        let (min, max) = vertices
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
        Aabb::from_min_max(min, max)
    }
}
