// src/manifold.rs

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Minimum translation result of an intersection test.
///
/// `normal` points from the first shape passed to a test toward the second;
/// moving the second shape by `normal * overlap` separates the pair.
/// Only meaningful when the test reported an intersection.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Manifold {
    pub normal: Vec2,
    pub overlap: f32,
}

impl Default for Manifold {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifold {
    pub fn new() -> Self {
        Self {
            normal: Vec2::ZERO,
            overlap: f32::MAX,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Keeps the candidate axis if its penetration is strictly smaller.
    ///
    /// The sign of `overlap` encodes the push direction: negative flips the
    /// normal, zero leaves the previous normal in place.
    pub fn update(&mut self, normal: Vec2, overlap: f32) {
        let abs_overlap = overlap.abs();

        if abs_overlap < self.overlap {
            self.overlap = abs_overlap;

            if overlap < 0.0 {
                self.normal = -normal;
            } else if overlap > 0.0 {
                self.normal = normal;
            }
        }
    }

    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            overlap: self.overlap,
        }
    }

    /// Translation that pushes the second shape out of the first.
    pub fn translation(&self) -> Vec2 {
        self.normal * self.overlap
    }
}
