//! Применение lunge hits
//!
//! - Target с Health → фиксированные LUNGE_DAMAGE
//! - Target без Health → удаляется из мира (instant kill fallback)
//! - Health дошёл до 0 → EntityDied + маркер Dead (flee отключается)

use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use crate::combat::hitbox::LungeHit;
use crate::components::{Health, MovementCommand};

/// Урон одного попадания рывка
pub const LUNGE_DAMAGE: u32 = 100;

/// Событие: урон нанесен
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Событие: entity умер (Health 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: target без Health удалён из мира
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyDestroyed {
    pub attacker: Entity,
    pub target: Entity,
}

/// Маркер: entity мертв (Health == 0). Трупы остаются на месте.
#[derive(Component, Debug)]
pub struct Dead;

/// Система: apply lunge hits
///
/// Каждый LungeHit — отдельное попадание (multi-hit за рывок сохраняется).
/// Despawn одного target максимум один раз за кадр, даже если его задели
/// несколько рывков.
pub fn apply_lunge_hits(
    mut commands: Commands,
    mut hit_events: EventReader<LungeHit>,
    mut targets: Query<&mut Health>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut destroyed_events: EventWriter<EnemyDestroyed>,
) {
    let mut destroyed: HashSet<Entity> = HashSet::default();

    for hit in hit_events.read() {
        if let Ok(mut health) = targets.get_mut(hit.target) {
            let was_alive = health.is_alive();
            health.take_damage(LUNGE_DAMAGE);
            let target_died = was_alive && !health.is_alive();

            damage_dealt_events.write(DamageDealt {
                attacker: hit.attacker,
                target: hit.target,
                damage: LUNGE_DAMAGE,
                target_died,
            });

            if target_died {
                entity_died_events.write(EntityDied {
                    entity: hit.target,
                    killer: Some(hit.attacker),
                });
                crate::logger::log_info(&format!(
                    "💀 Entity {:?} killed by {:?}",
                    hit.target, hit.attacker
                ));
            }
            continue;
        }

        // Нет Health → instant kill
        if !destroyed.insert(hit.target) {
            continue;
        }

        if let Ok(mut entity_commands) = commands.get_entity(hit.target) {
            entity_commands.despawn();
            destroyed_events.write(EnemyDestroyed {
                attacker: hit.attacker,
                target: hit.target,
            });
            crate::logger::log_info(&format!(
                "💥 Entity {:?} destroyed by {:?} (no Health)",
                hit.target, hit.attacker
            ));
        }
    }
}

/// Система: обработка смерти
///
/// Добавляет Dead и гасит MovementCommand (мёртвые не убегают).
pub fn handle_deaths(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    mut commands_query: Query<&mut MovementCommand>,
) {
    for event in death_events.read() {
        if let Ok(mut command) = commands_query.get_mut(event.entity) {
            *command = MovementCommand::Idle;
        }

        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.insert(Dead);
        }
    }
}
