//! Combat module: lunge attack
//!
//! Pipeline за кадр (Update, chain):
//! cooldown tick → AttackPressed → start → advance (Transform + LungeHitboxActive)
//! → detect (LungeHit) → apply (Health / despawn) → deaths

use bevy::prelude::*;

pub mod damage;
pub mod hitbox;
pub mod lunge;
pub mod systems;
mod lunge_tests;

pub use damage::{apply_lunge_hits, handle_deaths, DamageDealt, Dead, EnemyDestroyed, EntityDied, LUNGE_DAMAGE};
pub use hitbox::{detect_lunge_hits, overlap_sphere, LungeHit, LungeHitboxActive};
pub use lunge::{LungeAbility, LungeConfig, LungeMotion, LungeState, LungeStep};

use crate::input::PlayerInputSet;
use crate::navigation::NavigationSet;

/// Все combat системы; AI решает после них (видит Dead и новые позиции)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombatSet;

/// Combat Plugin
///
/// Порядок выполнения:
/// 1. activate_lunge_abilities — fail-fast проверка orientation/tunables
/// 2. sample_lunge_orientation — forward от orientation entity
/// 3. tick_lunge_cooldowns — one-shot gate timer (до старта: кадр, в котором
///    timer взведён, в cooldown не засчитывается)
/// 4. start_lunges — AttackPressed → Lunging
/// 5. advance_lunges — lerp позиции, hitbox на текущей позиции
/// 6. detect_lunge_hits — overlap query → LungeHit
/// 7. apply_lunge_hits — damage / despawn
/// 8. handle_deaths — Dead marker, MovementCommand → Idle
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LungeHitboxActive>()
            .add_event::<LungeHit>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<EnemyDestroyed>();

        app.add_systems(
            Update,
            (
                systems::activate_lunge_abilities,
                systems::sample_lunge_orientation,
                systems::tick_lunge_cooldowns,
                systems::start_lunges,
                systems::advance_lunges,
                detect_lunge_hits,
                apply_lunge_hits,
                handle_deaths,
            )
                .chain()
                .in_set(CombatSet)
                .after(PlayerInputSet)
                .before(NavigationSet),
        );
    }
}
