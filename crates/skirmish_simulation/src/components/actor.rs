//! Базовые компоненты акторов: Health и role markers

use bevy::prelude::*;

/// Здоровье (damage interface для lunge hits)
///
/// Инвариант: 0 ≤ current ≤ max.
/// Entity без Health при попадании lunge удаляется из мира целиком.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Marker: entity управляется игроком (input → AttackPressed)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker: убегающее существо (FleeController)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Critter;

/// Marker: враг, в которого целится lunge (сам по себе hit detection не влияет —
/// фильтрация идёт по CollisionGroups)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Marker: entity выбран в debug-overlay (reach gizmo рисуется только для них)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DebugSelected;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(250);

        health.take_damage(100);
        assert_eq!(health.current, 150);
        assert!(health.is_alive());

        health.take_damage(200); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }
}
