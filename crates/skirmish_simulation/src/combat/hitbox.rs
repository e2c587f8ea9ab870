//! Lunge hit detection (overlap query)
//!
//! Архитектура:
//! - `advance_lunges` каждый кадр рывка пишет `LungeHitboxActive` (сфера перед атакующим)
//! - `detect_lunge_hits` делает overlap query по Collider + CollisionGroups → `LungeHit`
//! - Никакого "already hit" трекинга: враг в сфере k кадров = k попаданий

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Событие: hitbox рывка активен в этом кадре
#[derive(Event, Debug, Clone)]
pub struct LungeHitboxActive {
    pub attacker: Entity,
    /// Центр сферы (после интерполяции позиции)
    pub center: Vec3,
    pub radius: f32,
    /// Какие слои задеваем
    pub layers: Group,
}

/// Событие: hitbox рывка задел target
#[derive(Event, Debug, Clone, PartialEq)]
pub struct LungeHit {
    pub attacker: Entity,
    pub target: Entity,
}

/// Радиус collider'а для overlap query.
///
/// Ball → его радиус, остальные формы считаются точкой.
pub fn collider_radius(collider: &Collider) -> f32 {
    collider.as_ball().map(|ball| ball.radius()).unwrap_or(0.0)
}

/// Overlap query: все candidates, чья сфера пересекает (center, radius)
/// и чьи memberships пересекаются с `layers`.
pub fn overlap_sphere<'a>(
    center: Vec3,
    radius: f32,
    layers: Group,
    candidates: impl IntoIterator<Item = (Entity, Vec3, &'a Collider, &'a CollisionGroups)>,
) -> Vec<Entity> {
    candidates
        .into_iter()
        .filter(|(_, _, _, groups)| groups.memberships.intersects(layers))
        .filter(|(_, position, collider, _)| {
            center.distance(*position) <= radius + collider_radius(collider)
        })
        .map(|(entity, ..)| entity)
        .collect()
}

/// Система: detect lunge hits
///
/// Читает LungeHitboxActive, генерирует LungeHit для каждого overlap.
pub fn detect_lunge_hits(
    mut hitbox_events: EventReader<LungeHitboxActive>,
    candidates: Query<(Entity, &Transform, &Collider, &CollisionGroups)>,
    mut hit_events: EventWriter<LungeHit>,
) {
    for hitbox in hitbox_events.read() {
        let hits = overlap_sphere(
            hitbox.center,
            hitbox.radius,
            hitbox.layers,
            candidates
                .iter()
                .map(|(entity, transform, collider, groups)| (entity, transform.translation, collider, groups)),
        );

        for target in hits {
            crate::logger::log(&format!(
                "🗡️ Lunge hit: {:?} → {:?} (layers: {})",
                hitbox.attacker,
                target,
                crate::collision_layers::get_layer_name(hitbox.layers)
            ));
            hit_events.write(LungeHit {
                attacker: hitbox.attacker,
                target,
            });
        }
    }
}
