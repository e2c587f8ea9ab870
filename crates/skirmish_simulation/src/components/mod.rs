//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: Health, маркеры Player / Critter / Enemy / DebugSelected
//! - movement: навигационный intent (MovementCommand, NavigationState, MovementSpeed)

pub mod actor;
pub mod movement;

pub use actor::*;
pub use movement::*;
