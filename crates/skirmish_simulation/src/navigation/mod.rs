//! Navigation executor (headless)
//!
//! Исполняет `MovementCommand` вместо NavMesh agent'а: путь = прямая линия
//! к destination со скоростью `MovementSpeed`. Request fire-and-forget —
//! gameplay системы только пишут команду, движение происходит здесь.

use bevy::prelude::*;
use crate::components::{MovementCommand, MovementSpeed, NavigationState};

/// Дистанция, при которой destination считается достигнутым (метры)
pub const ARRIVAL_DISTANCE: f32 = 0.05;

/// Navigation Plugin
///
/// `follow_movement_commands` крутится в `NavigationSet` (Update), после
/// gameplay систем, которые выдают requests.
pub struct NavigationPlugin;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationSet;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_movement_commands.in_set(NavigationSet));
    }
}

/// Один шаг к destination. Возвращает новую позицию и флаг "дошли".
pub fn step_towards(position: Vec3, destination: Vec3, max_step: f32) -> (Vec3, bool) {
    let offset = destination - position;
    let distance = offset.length();

    if distance <= max_step || distance <= ARRIVAL_DISTANCE {
        return (destination, true);
    }

    (position + offset / distance * max_step, false)
}

/// Система: исполнение MovementCommand
///
/// - MoveToPosition: шаг к target, `is_target_reached` ставится один раз
/// - Idle: ничего
pub fn follow_movement_commands(
    mut agents: Query<(
        Entity,
        &MovementCommand,
        &mut NavigationState,
        &mut Transform,
        Option<&MovementSpeed>,
    )>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, command, mut nav_state, mut transform, speed) in agents.iter_mut() {
        let destination = match *command {
            MovementCommand::MoveToPosition { target } => target,
            MovementCommand::Idle => continue,
        };

        // Новый destination → сбрасываем флаг
        if nav_state.last_destination != Some(destination) {
            nav_state.last_destination = Some(destination);
            nav_state.is_target_reached = false;
        }

        if nav_state.is_target_reached {
            continue;
        }

        let speed = speed.copied().unwrap_or_default().speed;
        let (next, arrived) = step_towards(transform.translation, destination, speed * delta);
        transform.translation = next;

        if arrived {
            nav_state.is_target_reached = true;
            crate::logger::log(&format!(
                "🧭 Navigation: {:?} reached {:?}",
                entity, destination
            ));
        }
    }
}
