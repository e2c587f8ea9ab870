//! Collision layers (rapier `Group` bitmasks)
//!
//! - Layer 1: Player
//! - Layer 2: Enemies (цели lunge hit detection)
//! - Layer 3: Critters (убегающие существа)
//! - Layer 4: Environment
//!
//! Lunge overlap query фильтрует по `memberships` цели ∩ `LungeConfig::enemy_layers`.

use bevy_rapier3d::prelude::{CollisionGroups, Group};

pub const COLLISION_LAYER_PLAYER: Group = Group::GROUP_1;
pub const COLLISION_LAYER_ENEMIES: Group = Group::GROUP_2;
pub const COLLISION_LAYER_CRITTERS: Group = Group::GROUP_3;
pub const COLLISION_LAYER_ENVIRONMENT: Group = Group::GROUP_4;

/// Enemy setup: на слое enemies, коллидирует с player + environment
pub fn enemy_collision_groups() -> CollisionGroups {
    CollisionGroups::new(
        COLLISION_LAYER_ENEMIES,
        COLLISION_LAYER_PLAYER | COLLISION_LAYER_ENVIRONMENT,
    )
}

pub fn critter_collision_groups() -> CollisionGroups {
    CollisionGroups::new(COLLISION_LAYER_CRITTERS, COLLISION_LAYER_ENVIRONMENT)
}

/// Название слоя для debug логов
pub fn get_layer_name(layer: Group) -> &'static str {
    if layer == COLLISION_LAYER_PLAYER {
        "Player"
    } else if layer == COLLISION_LAYER_ENEMIES {
        "Enemies"
    } else if layer == COLLISION_LAYER_CRITTERS {
        "Critters"
    } else if layer == COLLISION_LAYER_ENVIRONMENT {
        "Environment"
    } else {
        "Unknown"
    }
}
