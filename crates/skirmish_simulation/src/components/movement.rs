//! Movement компоненты: навигационный intent, скорость, состояние

use bevy::prelude::*;

/// Команда движения (navigation request)
///
/// Архитектура:
/// - Gameplay системы (flee) пишут MovementCommand (high-level intent)
/// - `navigation::follow_movement_commands` исполняет его (path = прямая линия)
///
/// Команда живёт пока её не перезапишут: MoveToPosition продолжает исполняться
/// даже если тот, кто её выдал, перестал её обновлять.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum MovementCommand {
    /// Стоять на месте
    #[default]
    Idle,
    /// Двигаться к позиции (world coordinates)
    MoveToPosition { target: Vec3 },
}

impl MovementCommand {
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            MovementCommand::MoveToPosition { target } => Some(*target),
            MovementCommand::Idle => None,
        }
    }
}

/// Состояние навигации (one-shot "target reached")
///
/// - `is_target_reached` выставляется ОДИН раз при достижении destination
/// - Сбрасывается когда destination меняется
#[derive(Component, Debug, Clone, Default)]
pub struct NavigationState {
    pub is_target_reached: bool,
    /// Последний destination, который executor видел
    pub last_destination: Option<Vec3>,
}

/// Скорость движения (метры/сек)
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 3.5 } // NavMeshAgent default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination() {
        let target = Vec3::new(1.0, 0.0, -2.0);
        assert_eq!(MovementCommand::MoveToPosition { target }.destination(), Some(target));
        assert_eq!(MovementCommand::Idle.destination(), None);
    }
}
