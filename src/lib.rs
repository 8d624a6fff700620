// src/lib.rs

pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod manifold;
pub mod projection;
pub mod shape;
pub mod voronoi;

pub use geometry::{Aabb, Circle, ConvexPolygon, ShapeError, MAX_VERTICES};
pub use intersection::SatTest;
pub use manifold::Manifold;
pub use shape::Shape;
