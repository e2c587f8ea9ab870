//! Player input → gameplay events
//!
//! `AttackPressed` — edge-triggered сигнал "атака нажата в этом кадре".
//! Host может слать его сам (тесты, scripted demo) или подключить
//! `bevy::input` — тогда LMB just_pressed конвертируется автоматически.

use bevy::input::mouse::MouseButton;
use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::combat::LungeAbility;
use crate::components::Player;

/// Player нажал атаку в этом кадре
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AttackPressed {
    pub entity: Entity,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerInputSet;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackPressed>()
            .add_systems(Update, attack_input_from_mouse.in_set(PlayerInputSet));
    }
}

/// System: LMB just_pressed → AttackPressed для каждого player с LungeAbility
///
/// Без `ButtonInput<MouseButton>` (headless, нет InputPlugin) — no-op.
pub fn attack_input_from_mouse(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    players: Query<Entity, (With<Player>, With<LungeAbility>)>,
    mut attack_events: EventWriter<AttackPressed>,
) {
    let Some(mouse) = mouse else {
        return;
    };

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    for entity in players.iter() {
        attack_events.write(AttackPressed { entity });
    }
}
