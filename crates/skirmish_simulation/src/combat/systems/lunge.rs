//! Lunge systems (state machine driven by frame clock + AttackPressed).

use bevy::prelude::*;
use crate::combat::{LungeAbility, LungeHitboxActive};
use crate::error::SetupError;
use crate::input::AttackPressed;

/// System: fail-fast активация LungeAbility.
///
/// Невалидные tunables или orientation без Transform — ошибка setup'а.
pub fn activate_lunge_abilities(
    abilities: Query<(Entity, &LungeAbility), Added<LungeAbility>>,
    orientations: Query<(), With<Transform>>,
) -> Result {
    for (entity, ability) in abilities.iter() {
        ability.config.validate(entity)?;

        if !orientations.contains(ability.orientation) {
            return Err(SetupError::MissingOrientation {
                owner: entity,
                orientation: ability.orientation,
            }
            .into());
        }

        crate::logger::log(&format!(
            "⚔️ Lunge ability {:?} armed (distance: {:.1}, duration: {:.2}s, cooldown: {:.2}s)",
            entity, ability.config.lunge_distance, ability.config.lunge_duration, ability.config.lunge_cooldown
        ));
    }

    Ok(())
}

/// System: forward direction от orientation entity (каждый кадр).
pub fn sample_lunge_orientation(
    mut abilities: Query<(Entity, &mut LungeAbility)>,
    orientations: Query<&Transform>,
) -> Result {
    for (entity, mut ability) in abilities.iter_mut() {
        let Ok(orientation) = orientations.get(ability.orientation) else {
            return Err(SetupError::MissingOrientation {
                owner: entity,
                orientation: ability.orientation,
            }
            .into());
        };

        let forward = orientation.forward().as_vec3();
        if ability.forward() != forward {
            ability.set_forward(forward);
        }
    }

    Ok(())
}

/// System: старт рывка по AttackPressed (edge-triggered).
///
/// Во время рывка или cooldown событие игнорируется.
pub fn start_lunges(
    mut attack_events: EventReader<AttackPressed>,
    mut abilities: Query<(&mut LungeAbility, &Transform)>,
) {
    for event in attack_events.read() {
        let Ok((mut ability, transform)) = abilities.get_mut(event.entity) else {
            continue;
        };

        let forward = ability.forward();
        if ability.try_start(transform.translation, forward) {
            crate::logger::log(&format!(
                "⚔️ Lunge started: {:?} from {:?} towards {:?}",
                event.entity,
                transform.translation,
                ability.motion().map(|motion| motion.target)
            ));
        } else {
            crate::logger::log(&format!(
                "⏳ Lunge ignored: {:?} (state: {:?}, cooldown ready: {})",
                event.entity,
                ability.state(),
                ability.is_cooldown_ready()
            ));
        }
    }
}

/// System: интерполяция позиции + hitbox этого кадра.
///
/// Hitbox пишется и в кадре, где рывок заканчивается.
pub fn advance_lunges(
    mut abilities: Query<(Entity, &mut LungeAbility, &mut Transform)>,
    mut hitbox_events: EventWriter<LungeHitboxActive>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, mut ability, mut transform) in abilities.iter_mut() {
        let Some(step) = ability.advance(delta) else {
            continue;
        };

        transform.translation = step.position;

        let forward = ability.forward();
        hitbox_events.write(LungeHitboxActive {
            attacker: entity,
            center: ability.hitbox_center(step.position, forward),
            radius: ability.config.hitbox_radius,
            layers: ability.config.enemy_group(),
        });

        if step.finished {
            crate::logger::log(&format!(
                "⚔️ Lunge finished: {:?} at {:?} → {:?}",
                entity,
                step.position,
                ability.state()
            ));
        }
    }
}

/// System: cooldown gate (one-shot timer, взведён при старте рывка).
///
/// Идёт до `start_lunges`: delta кадра прошла до нажатия, поэтому timer,
/// взведённый в этом кадре, впервые тикает только в следующем.
pub fn tick_lunge_cooldowns(
    mut abilities: Query<(Entity, &mut LungeAbility)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, mut ability) in abilities.iter_mut() {
        if ability.tick_cooldown(delta) {
            crate::logger::log(&format!(
                "✅ Lunge ready: {:?} (lunging: {})",
                entity,
                ability.is_lunging()
            ));
        }
    }
}
