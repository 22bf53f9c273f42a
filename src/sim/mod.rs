//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed tick, virtual clock only
//! - Seeded RNG only
//! - No rendering, input-device or timer dependencies

pub mod collision;
pub mod engine;
pub mod food;
pub mod geom;
pub mod input;
pub mod schedule;
pub mod snake;

pub use collision::{food_hit, self_hit};
pub use engine::{Engine, GamePhase, Snapshot, TickReport};
pub use food::Food;
pub use geom::{Axis, BoundingBox, Vector};
pub use input::{Command, DirectionHandle};
pub use schedule::{ScheduledMove, TailSchedule};
pub use snake::{Edge, Snake, TailMove};
