//! Flee AI: существо убегает от target, если тот ближе `flee_radius`.
//!
//! Destination = self + (self − target): смещение от target удваивается.
//! Формула сохранена буквально (не "отбежать на фиксированную дистанцию").

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{MovementCommand, NavigationState};
use crate::error::{ensure_non_negative, SetupError};

/// Радиус по умолчанию (метры)
pub const DEFAULT_FLEE_RADIUS: f32 = 4.0;

/// Flee controller (per-critter)
///
/// `target` — non-owning handle: контроллер никогда не спавнит/деспавнит его.
/// Navigation handle = `MovementCommand` на этой же entity (required component).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform, MovementCommand, NavigationState)]
pub struct FleeController {
    pub target: Entity,
    pub flee_radius: f32,
}

impl FleeController {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            flee_radius: DEFAULT_FLEE_RADIUS,
        }
    }

    pub fn with_radius(mut self, flee_radius: f32) -> Self {
        self.flee_radius = flee_radius;
        self
    }
}

/// Куда бежать от target (None = target вне радиуса, request не нужен)
///
/// Strict inequality: на distance == radius существо не реагирует.
pub fn flee_destination(position: Vec3, target_position: Vec3, flee_radius: f32) -> Option<Vec3> {
    if position.distance(target_position) >= flee_radius {
        return None;
    }

    let away_from_target = position - target_position;
    Some(position + away_from_target)
}

/// Система: fail-fast активация
///
/// Target без Transform = ошибка конфигурации, всплывает сразу
/// через Bevy error handler (а не тихий skip каждый кадр).
pub fn activate_flee_controllers(
    controllers: Query<(Entity, &FleeController), Added<FleeController>>,
    targets: Query<(), With<Transform>>,
) -> Result {
    for (entity, controller) in controllers.iter() {
        ensure_non_negative(entity, "flee_radius", controller.flee_radius)?;

        if !targets.contains(controller.target) {
            return Err(SetupError::MissingFleeTarget {
                controller: entity,
                target: controller.target,
            }
            .into());
        }

        crate::logger::log(&format!(
            "🐇 Flee controller {:?} armed (target: {:?}, radius: {:.1})",
            entity, controller.target, controller.flee_radius
        ));
    }

    Ok(())
}

/// Система: flee decision каждый кадр
///
/// Внутри радиуса — новый MoveToPosition каждый кадр (destination слегка
/// меняется вместе с позициями). Вне радиуса — ничего не пишем: последний
/// destination остаётся в силе.
pub fn flee_from_targets(
    mut critters: Query<(Entity, &FleeController, &Transform, &mut MovementCommand), Without<Dead>>,
    targets: Query<&Transform>,
) -> Result {
    for (entity, controller, transform, mut command) in critters.iter_mut() {
        let Ok(target_transform) = targets.get(controller.target) else {
            return Err(SetupError::MissingFleeTarget {
                controller: entity,
                target: controller.target,
            }
            .into());
        };

        if let Some(destination) = flee_destination(
            transform.translation,
            target_transform.translation,
            controller.flee_radius,
        ) {
            *command = MovementCommand::MoveToPosition { target: destination };
        }
    }

    Ok(())
}
