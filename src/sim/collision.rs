//! Collision checks
//!
//! Movement is grid-stepped, so a hit is exact equality of top-left corners.

use super::food::Food;
use super::geom::BoundingBox;
use super::snake::Snake;

/// Head sits on the food cell
pub fn food_hit(snake: &Snake, food: &Food) -> bool {
    snake.head.same_cell(&food.rect)
}

/// Index of the first tail segment sharing the head's cell
pub fn self_hit(snake: &Snake) -> Option<usize> {
    tail_hit(&snake.head, &snake.tail)
}

fn tail_hit(head: &BoundingBox, tail: &[BoundingBox]) -> Option<usize> {
    tail.iter().position(|segment| head.same_cell(segment))
}
