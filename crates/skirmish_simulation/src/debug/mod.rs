//! Debug overlay: reach sphere рывка
//!
//! Wireframe сфера на максимальной дальности lunge для `DebugSelected`
//! entities. Только диагностика (feature `debug_gizmos`).

#[cfg(feature = "debug_gizmos")]
use bevy::color::palettes::css::RED;
use bevy::prelude::*;

use crate::combat::LungeAbility;
use crate::components::DebugSelected;

/// Reach sphere (center, radius) для каждого выбранного lunge entity
pub fn selected_reach_spheres<'a>(
    abilities: impl IntoIterator<Item = (&'a LungeAbility, &'a Transform)>,
) -> Vec<(Vec3, f32)> {
    abilities
        .into_iter()
        .map(|(ability, transform)| ability.reach_sphere(transform.translation, ability.forward()))
        .collect()
}

#[cfg(feature = "debug_gizmos")]
pub fn draw_lunge_reach_gizmos(
    mut gizmos: Gizmos,
    abilities: Query<(&LungeAbility, &Transform), With<DebugSelected>>,
) {
    for (center, radius) in selected_reach_spheres(abilities.iter()) {
        gizmos.sphere(Isometry3d::from_translation(center), radius, RED);
    }
}

/// Debug Plugin (пустой без `debug_gizmos`)
pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, _app: &mut App) {
        #[cfg(feature = "debug_gizmos")]
        _app.add_systems(PostUpdate, draw_lunge_reach_gizmos);
    }
}

/// Количество выбранных lunge entities (для debug логов headless demo)
pub fn selected_lunge_count(world: &mut World) -> usize {
    world
        .query_filtered::<&LungeAbility, With<DebugSelected>>()
        .iter(world)
        .count()
}
