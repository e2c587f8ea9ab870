//! Setup errors.
//!
//! Missing handles and broken tunables are configuration faults: activation
//! systems return them through Bevy's error handler instead of skipping the
//! entity every frame.

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    /// FleeController.target не резолвится в entity с Transform
    #[error("flee controller {controller:?}: target {target:?} has no Transform")]
    MissingFleeTarget { controller: Entity, target: Entity },

    /// LungeAbility.orientation не резолвится в entity с Transform
    #[error("lunge ability {owner:?}: orientation {orientation:?} has no Transform")]
    MissingOrientation { owner: Entity, orientation: Entity },

    #[error("{owner:?}: invalid tunable `{field}` = {value}")]
    InvalidTunable {
        owner: Entity,
        field: &'static str,
        value: f32,
    },
}

/// Tunable must be finite and non-negative.
pub(crate) fn ensure_non_negative(owner: Entity, field: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidTunable { owner, field, value })
    }
}

/// Tunable must be finite and strictly positive (used as a divisor).
pub(crate) fn ensure_positive(owner: Entity, field: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidTunable { owner, field, value })
    }
}
