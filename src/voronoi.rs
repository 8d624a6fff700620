// src/voronoi.rs

use glam::Vec2;

/// Where a point falls relative to a segment: behind its start, past its end, or alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoronoiRegion {
    Left,
    Right,
    Middle,
}

impl VoronoiRegion {
    /// `point` is relative to the segment start, `line` is the segment direction (end - start).
    #[inline(always)]
    pub fn classify(point: Vec2, line: Vec2) -> Self {
        let len2 = line.length_squared();
        let dot = point.dot(line);

        if dot < 0.0 {
            VoronoiRegion::Left
        } else if dot > len2 {
            VoronoiRegion::Right
        } else {
            VoronoiRegion::Middle
        }
    }
}
