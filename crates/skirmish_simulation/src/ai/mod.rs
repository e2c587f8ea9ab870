//! AI decision-making module
//!
//! Flee AI: реактивное решение каждый кадр, без FSM.

use bevy::prelude::*;

pub mod flee;

pub use flee::{flee_destination, FleeController, DEFAULT_FLEE_RADIUS};

use crate::combat::CombatSet;
use crate::navigation::NavigationSet;

/// AI Plugin
///
/// Порядок выполнения (Update):
/// 1. activate_flee_controllers — fail-fast проверка target handle
/// 2. flee_from_targets — distance check → MovementCommand
///
/// После CombatSet (мёртвые уже помечены Dead), до NavigationSet:
/// request исполняется в том же кадре.
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (flee::activate_flee_controllers, flee::flee_from_targets)
                .chain()
                .after(CombatSet)
                .before(NavigationSet),
        );
    }
}
