//! Lunge ability: state machine + геометрия рывка.
//!
//! ```text
//! Idle ──AttackPressed──▶ Lunging ──elapsed ≥ duration──▶ CoolingDown ──timer──▶ Idle
//!                            │                                                  ▲
//!                            └──elapsed ≥ duration (cooldown уже истёк)─────────┘
//! ```
//!
//! Cooldown timer взводится в момент СТАРТА рывка (не в конце) и не отменяется.
//! Если `lunge_cooldown < lunge_duration`, gate открывается ещё во время рывка,
//! и по окончании рывка ability сразу возвращается в Idle.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use serde::{Deserialize, Serialize};

use crate::collision_layers::COLLISION_LAYER_ENEMIES;
use crate::error::{ensure_non_negative, ensure_positive, SetupError};

/// Tunables (выставляются один раз при setup)
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct LungeConfig {
    /// Дистанция рывка (метры)
    pub lunge_distance: f32,
    /// Длительность рывка (секунды)
    pub lunge_duration: f32,
    /// Cooldown от начала рывка до следующего (секунды)
    pub lunge_cooldown: f32,
    /// Радиус hit detection сферы; она же смещена вперёд на этот радиус
    pub hitbox_radius: f32,
    /// Радиус debug сферы на максимальной дальности рывка
    pub gizmo_radius: f32,
    /// Bitmask слоёв, по которым бьёт рывок (rapier `Group` bits)
    pub enemy_layers: u32,
}

impl Default for LungeConfig {
    fn default() -> Self {
        Self {
            lunge_distance: 5.0,
            lunge_duration: 0.3,
            lunge_cooldown: 1.0,
            hitbox_radius: 0.5,
            gizmo_radius: 0.5,
            enemy_layers: COLLISION_LAYER_ENEMIES.bits(),
        }
    }
}

impl LungeConfig {
    pub fn enemy_group(&self) -> Group {
        Group::from_bits_truncate(self.enemy_layers)
    }

    /// Fail-fast проверка tunables (duration — делитель интерполяции)
    pub fn validate(&self, owner: Entity) -> Result<(), SetupError> {
        ensure_non_negative(owner, "lunge_distance", self.lunge_distance)?;
        ensure_positive(owner, "lunge_duration", self.lunge_duration)?;
        ensure_non_negative(owner, "lunge_cooldown", self.lunge_cooldown)?;
        ensure_non_negative(owner, "hitbox_radius", self.hitbox_radius)?;
        ensure_non_negative(owner, "gizmo_radius", self.gizmo_radius)?;
        Ok(())
    }
}

/// Рывок в процессе. Существует только внутри `LungeState::Lunging`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LungeMotion {
    pub start: Vec3,
    pub target: Vec3,
    pub elapsed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub enum LungeState {
    #[default]
    Idle,
    Lunging(LungeMotion),
    /// Рывок закончился, cooldown gate ещё закрыт
    CoolingDown,
}

/// Результат одного кадра рывка
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LungeStep {
    /// Позиция после интерполяции (hit detection идёт от неё)
    pub position: Vec3,
    /// Рывок закончился в этом кадре
    pub finished: bool,
}

/// Lunge ability (player)
///
/// `orientation` — non-owning handle на entity, чей `Transform::forward()`
/// задаёт направление рывка. Forward сэмплируется каждый кадр системой
/// `sample_lunge_orientation`.
#[derive(Component, Debug, Clone)]
#[require(Transform)]
pub struct LungeAbility {
    pub config: LungeConfig,
    pub orientation: Entity,
    forward: Vec3,
    state: LungeState,
    /// One-shot gate timer; `None` = можно начинать новый рывок
    cooldown: Option<Timer>,
}

impl LungeAbility {
    pub fn new(orientation: Entity) -> Self {
        Self {
            config: LungeConfig::default(),
            orientation,
            forward: Vec3::NEG_Z,
            state: LungeState::Idle,
            cooldown: None,
        }
    }

    pub fn with_config(mut self, config: LungeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> &LungeState {
        &self.state
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    pub fn is_lunging(&self) -> bool {
        matches!(self.state, LungeState::Lunging(_))
    }

    pub fn is_cooldown_ready(&self) -> bool {
        self.cooldown.is_none()
    }

    pub fn can_lunge(&self) -> bool {
        self.is_cooldown_ready() && !self.is_lunging()
    }

    /// Текущий рывок (только в Lunging)
    pub fn motion(&self) -> Option<&LungeMotion> {
        match &self.state {
            LungeState::Lunging(motion) => Some(motion),
            LungeState::Idle | LungeState::CoolingDown => None,
        }
    }

    /// Idle → Lunging. Возвращает false, если рывок или cooldown ещё идут
    /// (состояние при этом не трогается).
    pub fn try_start(&mut self, position: Vec3, forward: Vec3) -> bool {
        if !self.can_lunge() {
            return false;
        }

        self.state = LungeState::Lunging(LungeMotion {
            start: position,
            target: position + forward * self.config.lunge_distance,
            elapsed: 0.0,
        });
        self.cooldown = Some(Timer::from_seconds(self.config.lunge_cooldown, TimerMode::Once));
        true
    }

    /// Кадр рывка: elapsed += delta, lerp(start, target, elapsed / duration).
    ///
    /// Factor клампится в 1.0 — на последнем кадре позиция ровно `target`.
    pub fn advance(&mut self, delta: f32) -> Option<LungeStep> {
        let LungeState::Lunging(motion) = &mut self.state else {
            return None;
        };

        motion.elapsed += delta;
        let factor = (motion.elapsed / self.config.lunge_duration).min(1.0);
        let position = motion.start.lerp(motion.target, factor);
        let finished = motion.elapsed >= self.config.lunge_duration;

        if finished {
            self.state = if self.cooldown.is_some() {
                LungeState::CoolingDown
            } else {
                LungeState::Idle
            };
        }

        Some(LungeStep { position, finished })
    }

    /// Тикает cooldown gate независимо от состояния рывка.
    ///
    /// Возвращает true в кадре, когда gate открылся.
    pub fn tick_cooldown(&mut self, delta: f32) -> bool {
        let Some(timer) = self.cooldown.as_mut() else {
            return false;
        };

        timer.tick(Duration::from_secs_f32(delta.max(0.0)));
        if !timer.finished() {
            return false;
        }

        self.cooldown = None;
        if self.state == LungeState::CoolingDown {
            self.state = LungeState::Idle;
        }
        true
    }

    /// Центр hit detection сферы: позиция + forward × hitbox_radius
    pub fn hitbox_center(&self, position: Vec3, forward: Vec3) -> Vec3 {
        position + forward * self.config.hitbox_radius
    }

    /// Debug сфера на максимальной дальности рывка (center, radius)
    pub fn reach_sphere(&self, position: Vec3, forward: Vec3) -> (Vec3, f32) {
        (
            position + forward * self.config.lunge_distance,
            self.config.gizmo_radius,
        )
    }
}
