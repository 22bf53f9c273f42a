//! Snake state: head, heading and the tail segments
//!
//! The snake only stores state and applies coordinate changes. Deciding when
//! and where it moves is the engine's job.

use serde::{Deserialize, Serialize};

use super::geom::{Axis, BoundingBox, Vector};
use super::input::Command;
use crate::error::SnakeError;

/// Boundary a tail edge-teleport snaps segments to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::X,
            Edge::Top | Edge::Bottom => Axis::Y,
        }
    }
}

/// A single change applied to one tail segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailMove {
    /// Replay the head's step in this heading
    Step(Command),
    /// Snap the crossed axis to one fixed boundary value
    Edge { edge: Edge, value: i32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub head: BoundingBox,
    /// Step magnitude per axis
    pub vel: Vector,
    /// Committed heading as a vector; zero until the first command
    pub direction: Vector,
    /// Oldest segment first
    pub tail: Vec<BoundingBox>,
    /// Index of the newest segment, -1 when the tail is empty
    pub current_segment: i32,
    pub current_tail_size: i32,
    /// Carried in state, not enforced by growth
    pub max_tail_size: i32,
}

impl Snake {
    pub fn new(size: i32, max_tail_size: i32) -> Self {
        Self {
            head: BoundingBox::square(size),
            vel: Vector::ZERO,
            direction: Vector::ZERO,
            tail: Vec::new(),
            current_segment: -1,
            current_tail_size: 0,
            max_tail_size,
        }
    }

    pub fn pos(&self) -> Vector {
        self.head.pos
    }

    /// Commit a new heading. Reversing onto the tail is allowed.
    pub fn change_direction(&mut self, command: Command) {
        self.direction = command.unit();
    }

    /// Parse a raw command and commit it; unknown input changes nothing
    pub fn change_movement_direction(&mut self, input: &str) -> Result<Command, SnakeError> {
        let command = input.parse()?;
        self.change_direction(command);
        Ok(command)
    }

    /// Heading derived from the direction vector, x axis first
    pub fn heading(&self) -> Option<Command> {
        match (self.direction.x.signum(), self.direction.y.signum()) {
            (1, _) => Some(Command::Right),
            (-1, _) => Some(Command::Left),
            (_, 1) => Some(Command::Down),
            (_, -1) => Some(Command::Up),
            _ => None,
        }
    }

    /// Append a segment sized like the head. The caller positions it.
    pub fn add_tail_segment(&mut self) -> usize {
        self.current_segment += 1;
        self.current_tail_size += 1;
        self.tail.push(BoundingBox::new(self.head.size.x, self.head.size.y));
        self.tail.len() - 1
    }

    pub fn set_position(&mut self, axis: Axis, value: i32) {
        self.head.set_position(axis, value);
    }

    pub fn set_tail_segment_position(&mut self, segment: usize, axis: Axis, value: i32) {
        if let Some(seg) = self.tail.get_mut(segment) {
            seg.set_position(axis, value);
        }
    }

    /// Step the head by `vel` in `heading`
    pub fn step_head(&mut self, heading: Command) {
        self.head.pos += heading.unit() * self.vel;
    }

    /// Apply a tail move to one segment; a segment that no longer exists is skipped
    pub fn apply_tail_move(&mut self, segment: usize, action: TailMove) {
        let vel = self.vel;
        let Some(seg) = self.tail.get_mut(segment) else {
            return;
        };
        match action {
            TailMove::Step(heading) => seg.pos += heading.unit() * vel,
            TailMove::Edge { edge, value } => seg.set_position(edge.axis(), value),
        }
    }

    /// Back to the freshly created state with the given step magnitude
    pub fn reset(&mut self, velocity: i32) {
        self.tail.clear();
        self.current_segment = -1;
        self.current_tail_size = 0;
        self.set_position(Axis::X, 0);
        self.set_position(Axis::Y, 0);
        self.direction = Vector::ZERO;
        self.vel = Vector::splat(velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_empty() {
        let snake = Snake::new(20, 10);
        assert_eq!(snake.pos(), Vector::ZERO);
        assert_eq!(snake.direction, Vector::ZERO);
        assert_eq!(snake.current_segment, -1);
        assert!(snake.tail.is_empty());
        assert_eq!(snake.heading(), None);
    }

    #[test]
    fn test_change_direction_single_axis() {
        let mut snake = Snake::new(20, 10);
        for input in ["up", "down", "left", "right"] {
            snake.change_movement_direction(input).unwrap();
            let d = snake.direction;
            assert!((d.x == 0) != (d.y == 0), "{input}: {d:?}");
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn test_invalid_command_leaves_direction() {
        let mut snake = Snake::new(20, 10);
        snake.change_direction(Command::Left);
        let err = snake.change_movement_direction("north").unwrap_err();
        assert!(matches!(err, SnakeError::InvalidCommand(_)));
        assert_eq!(snake.direction, Vector::new(-1, 0));
    }

    #[test]
    fn test_reversal_allowed() {
        let mut snake = Snake::new(20, 10);
        snake.change_direction(Command::Right);
        snake.change_direction(Command::Left);
        assert_eq!(snake.heading(), Some(Command::Left));
    }

    #[test]
    fn test_add_tail_segment_keeps_index_invariant() {
        let mut snake = Snake::new(20, 3);
        for n in 1..=12 {
            let idx = snake.add_tail_segment();
            assert_eq!(idx as i32, snake.current_segment);
            assert_eq!(snake.tail.len() as i32, snake.current_segment + 1);
            assert_eq!(snake.current_tail_size, n);
            assert_eq!(snake.tail[idx].size, snake.head.size);
        }
        // Cap is not enforced
        assert_eq!(snake.tail.len(), 12);
    }

    #[test]
    fn test_apply_tail_moves() {
        let mut snake = Snake::new(20, 10);
        snake.vel = Vector::splat(20);
        let idx = snake.add_tail_segment();
        snake.set_tail_segment_position(idx, Axis::X, 40);
        snake.set_tail_segment_position(idx, Axis::Y, 60);

        snake.apply_tail_move(idx, TailMove::Step(Command::Up));
        assert_eq!(snake.tail[idx].pos, Vector::new(40, 40));

        snake.apply_tail_move(
            idx,
            TailMove::Edge {
                edge: Edge::Right,
                value: 400,
            },
        );
        assert_eq!(snake.tail[idx].pos, Vector::new(400, 40));

        // Out of range is a no-op
        snake.apply_tail_move(5, TailMove::Step(Command::Down));
    }

    #[test]
    fn test_reset() {
        let mut snake = Snake::new(20, 10);
        snake.change_direction(Command::Down);
        snake.step_head(Command::Down);
        snake.add_tail_segment();
        snake.reset(20);
        assert!(snake.tail.is_empty());
        assert_eq!(snake.current_segment, -1);
        assert_eq!(snake.current_tail_size, 0);
        assert_eq!(snake.pos(), Vector::ZERO);
        assert_eq!(snake.direction, Vector::ZERO);
        assert_eq!(snake.vel, Vector::splat(20));
    }
}
