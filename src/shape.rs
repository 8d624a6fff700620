// src/shape.rs

use crate::geometry::{Aabb, Circle, ConvexPolygon, MAX_VERTICES};
use crate::intersection::SatTest;
use crate::manifold::Manifold;

/// Either kind of collision shape, so callers can test arbitrary pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<const N: usize = MAX_VERTICES> {
    Circle(Circle),
    Polygon(ConvexPolygon<N>),
}

impl<const N: usize> From<Circle> for Shape<N> {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl<const N: usize> From<ConvexPolygon<N>> for Shape<N> {
    fn from(polygon: ConvexPolygon<N>) -> Self {
        Shape::Polygon(polygon)
    }
}

impl<const N: usize> From<Aabb> for Shape<N> {
    fn from(aabb: Aabb) -> Self {
        Shape::Polygon(ConvexPolygon::from_aabb(&aabb))
    }
}

impl<const N: usize> Shape<N> {
    pub fn intersects(&self, other: &Shape<N>, manifold: Option<&mut Manifold>) -> bool {
        match (self, other) {
            (Shape::Polygon(a), Shape::Polygon(b)) => SatTest::poly_poly(a, b, manifold),
            (Shape::Polygon(a), Shape::Circle(b)) => SatTest::poly_circle(a, b, manifold),
            (Shape::Circle(a), Shape::Polygon(b)) => SatTest::circle_poly(a, b, manifold),
            (Shape::Circle(a), Shape::Circle(b)) => SatTest::circle_circle(a, b, manifold),
        }
    }

    /// `None` when separated, otherwise the minimum translation from `self` toward `other`.
    pub fn contact(&self, other: &Shape<N>) -> Option<Manifold> {
        let mut manifold = Manifold::new();
        self.intersects(other, Some(&mut manifold)).then_some(manifold)
    }

    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.aabb(),
            Shape::Polygon(polygon) => polygon.aabb(),
        }
    }
}
