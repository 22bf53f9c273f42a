//! Food placement
//!
//! Food is snapped to the cell grid so the grid-stepped head can land on it
//! exactly. Placement does not avoid the snake.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{BoundingBox, Vector};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub rect: BoundingBox,
}

impl Food {
    pub fn new(size: i32) -> Self {
        Self {
            rect: BoundingBox::square(size),
        }
    }

    pub fn pos(&self) -> Vector {
        self.rect.pos
    }

    /// Move to a random grid-aligned cell inside the field
    ///
    /// Each axis draws uniformly from `[0, field - size)` and floors to a
    /// multiple of `cell_size`. The field must be larger than the food.
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        field_width: i32,
        field_height: i32,
        cell_size: i32,
    ) {
        self.rect.pos = Vector::new(
            grid_floor(rng.random_range(0..field_width - self.rect.size.x), cell_size),
            grid_floor(rng.random_range(0..field_height - self.rect.size.y), cell_size),
        );
    }
}

#[inline]
fn grid_floor(value: i32, cell_size: i32) -> i32 {
    value.div_euclid(cell_size) * cell_size
}
