//! Steering commands and the latest-direction register
//!
//! Input may arrive at any time between ticks, possibly from another thread.
//! It is written into a single atomic slot; the engine swaps the slot out
//! once at the start of each tick, so the last write before a tick wins.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use super::geom::Vector;
use crate::error::SnakeError;

/// Discrete steering command, also used as the committed heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];

    /// Unit direction vector (screen coordinates, y grows downward)
    pub fn unit(self) -> Vector {
        match self {
            Command::Up => Vector::new(0, -1),
            Command::Down => Vector::new(0, 1),
            Command::Left => Vector::new(-1, 0),
            Command::Right => Vector::new(1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
        }
    }

    fn encode(self) -> u8 {
        match self {
            Command::Up => 1,
            Command::Down => 2,
            Command::Left => 3,
            Command::Right => 4,
        }
    }

    fn decode(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Command::Up),
            2 => Some(Command::Down),
            3 => Some(Command::Left),
            4 => Some(Command::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = SnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            other => Err(SnakeError::InvalidCommand(other.to_string())),
        }
    }
}

const EMPTY: u8 = 0;

/// Writer side of the latest-direction register
///
/// Cheap to clone and `Send`, so an input thread can hold its own copy.
#[derive(Debug, Clone, Default)]
pub struct DirectionHandle {
    slot: Arc<AtomicU8>,
}

impl DirectionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite any unread command
    pub fn submit(&self, command: Command) {
        self.slot.store(command.encode(), Ordering::Release);
    }

    /// Parse and submit; an unknown command leaves the register untouched
    pub fn submit_str(&self, input: &str) -> Result<Command, SnakeError> {
        let command = input.parse()?;
        self.submit(command);
        Ok(command)
    }

    /// Take the latest command, leaving the register empty
    pub fn take(&self) -> Option<Command> {
        Command::decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    /// Drop any unread command
    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_units_have_one_axis() {
        for command in Command::ALL {
            let unit = command.unit();
            assert_eq!(unit.x.abs() + unit.y.abs(), 1, "{command}");
            assert!(unit.x == 0 || unit.y == 0, "{command}");
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for command in Command::ALL {
            assert_eq!(command.as_str().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_last_write_wins() {
        let handle = DirectionHandle::new();
        assert_eq!(handle.take(), None);
        handle.submit(Command::Up);
        handle.submit(Command::Left);
        assert_eq!(handle.take(), Some(Command::Left));
        assert_eq!(handle.take(), None);
    }

    #[test]
    fn test_invalid_submit_keeps_pending() {
        let handle = DirectionHandle::new();
        handle.submit(Command::Down);
        let err = handle.submit_str("sideways").unwrap_err();
        assert!(matches!(err, SnakeError::InvalidCommand(ref s) if s == "sideways"));
        assert_eq!(handle.take(), Some(Command::Down));
    }

    #[test]
    fn test_clones_share_slot() {
        let handle = DirectionHandle::new();
        let writer = handle.clone();
        std::thread::spawn(move || writer.submit(Command::Right))
            .join()
            .unwrap();
        assert_eq!(handle.take(), Some(Command::Right));
        handle.submit(Command::Up);
        handle.clear();
        assert_eq!(handle.take(), None);
    }

    proptest! {
        #[test]
        fn prop_unknown_strings_rejected(s in "\\PC*") {
            prop_assume!(!matches!(s.as_str(), "up" | "down" | "left" | "right"));
            prop_assert!(matches!(s.parse::<Command>(), Err(SnakeError::InvalidCommand(_))));
        }
    }
}
