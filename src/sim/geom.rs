//! Integer grid geometry
//!
//! Everything on the play field is an axis-aligned square box stepped by
//! whole cells, so positions are plain integer vectors and collisions are
//! exact equality checks.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// 2D integer coordinate or delta
pub type Vector = IVec2;

/// One of the two field axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Mutable access to this axis of a vector
    #[inline]
    pub fn of_mut(self, v: &mut Vector) -> &mut i32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// Axis-aligned box: `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub pos: Vector,
    pub size: Vector,
}

impl BoundingBox {
    /// Box of the given size at the origin
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            pos: Vector::ZERO,
            size: Vector::new(width, height),
        }
    }

    /// Square box of side `side` at the origin
    pub fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// Set a single coordinate of the position
    #[inline]
    pub fn set_position(&mut self, axis: Axis, value: i32) {
        *axis.of_mut(&mut self.pos) = value;
    }

    /// Same cell as `other` (top-left corners equal)
    #[inline]
    pub fn same_cell(&self, other: &BoundingBox) -> bool {
        self.pos == other.pos
    }
}
