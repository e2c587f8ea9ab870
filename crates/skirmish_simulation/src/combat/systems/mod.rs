//! Combat systems.

pub mod lunge;

pub use lunge::*;
