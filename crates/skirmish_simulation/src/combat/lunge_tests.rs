//! Tests for the lunge state machine.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use super::super::lunge::{LungeAbility, LungeConfig, LungeState};
    use crate::collision_layers::COLLISION_LAYER_ENEMIES;
    use crate::error::SetupError;

    fn ability(duration: f32, cooldown: f32) -> LungeAbility {
        LungeAbility::new(Entity::PLACEHOLDER).with_config(LungeConfig {
            lunge_distance: 5.0,
            lunge_duration: duration,
            lunge_cooldown: cooldown,
            ..default()
        })
    }

    #[test]
    fn test_lunge_config_default() {
        let config = LungeConfig::default();
        assert_eq!(config.lunge_distance, 5.0);
        assert_eq!(config.lunge_duration, 0.3);
        assert_eq!(config.lunge_cooldown, 1.0);
        assert_eq!(config.hitbox_radius, 0.5);
        assert_eq!(config.gizmo_radius, 0.5);
        assert_eq!(config.enemy_group(), COLLISION_LAYER_ENEMIES);
    }

    #[test]
    fn test_lunge_config_rejects_zero_duration() {
        let config = LungeConfig {
            lunge_duration: 0.0,
            ..default()
        };
        assert!(matches!(
            config.validate(Entity::PLACEHOLDER),
            Err(SetupError::InvalidTunable { field: "lunge_duration", .. })
        ));
        assert!(LungeConfig::default().validate(Entity::PLACEHOLDER).is_ok());
    }

    #[test]
    fn test_lunge_geometry_forward_z() {
        let mut lunge = ability(0.5, 1.0);
        assert!(lunge.try_start(Vec3::ZERO, Vec3::Z));

        let motion = *lunge.motion().unwrap();
        assert_eq!(motion.start, Vec3::ZERO);
        assert_eq!(motion.target, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(motion.elapsed, 0.0);

        // Половина длительности → половина пути
        let step = lunge.advance(0.25).unwrap();
        assert_eq!(step.position, Vec3::new(0.0, 0.0, 2.5));
        assert!(!step.finished);
    }

    #[test]
    fn test_lunge_ends_into_cooldown() {
        let mut lunge = ability(0.5, 1.0);
        lunge.try_start(Vec3::ZERO, Vec3::X);

        lunge.advance(0.25);
        let step = lunge.advance(0.25).unwrap();
        assert!(step.finished);
        assert_eq!(step.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(*lunge.state(), LungeState::CoolingDown);

        // Больше не двигаемся
        assert!(lunge.advance(0.25).is_none());
    }

    #[test]
    fn test_lunge_overshoot_clamps_to_target() {
        let mut lunge = ability(0.5, 1.0);
        lunge.try_start(Vec3::ZERO, Vec3::Z);

        // Один длинный кадр (лаг) — позиция не уезжает дальше target
        let step = lunge.advance(2.0).unwrap();
        assert_eq!(step.position, Vec3::new(0.0, 0.0, 5.0));
        assert!(step.finished);
    }

    #[test]
    fn test_attack_ignored_while_lunging() {
        let mut lunge = ability(0.5, 1.0);
        lunge.try_start(Vec3::ZERO, Vec3::Z);
        lunge.advance(0.125);
        let before = *lunge.motion().unwrap();

        assert!(!lunge.try_start(Vec3::new(9.0, 0.0, 0.0), Vec3::X));
        assert_eq!(*lunge.motion().unwrap(), before);
    }

    #[test]
    fn test_attack_ignored_while_cooling_down() {
        let mut lunge = ability(0.25, 1.0);
        lunge.try_start(Vec3::ZERO, Vec3::Z);
        lunge.advance(0.25);
        lunge.tick_cooldown(0.25);
        assert_eq!(*lunge.state(), LungeState::CoolingDown);

        assert!(!lunge.try_start(Vec3::ZERO, Vec3::Z));
        assert_eq!(*lunge.state(), LungeState::CoolingDown);

        // Cooldown отсчитывается от старта: ещё 0.75s
        assert!(!lunge.tick_cooldown(0.5));
        assert!(lunge.tick_cooldown(0.25));
        assert_eq!(*lunge.state(), LungeState::Idle);
        assert!(lunge.try_start(Vec3::ZERO, Vec3::Z));
    }

    #[test]
    fn test_short_cooldown_reopens_gate_mid_lunge() {
        let mut lunge = ability(0.5, 0.25);
        lunge.try_start(Vec3::ZERO, Vec3::Z);

        lunge.advance(0.25);
        assert!(lunge.tick_cooldown(0.25));

        // Gate открыт, но рывок ещё идёт
        assert!(lunge.is_cooldown_ready());
        assert!(lunge.is_lunging());
        assert!(!lunge.can_lunge());

        // Конец рывка → сразу Idle, без CoolingDown
        let step = lunge.advance(0.25).unwrap();
        assert!(step.finished);
        assert_eq!(*lunge.state(), LungeState::Idle);
        assert!(lunge.try_start(Vec3::new(0.0, 0.0, 5.0), Vec3::Z));
    }

    #[test]
    fn test_tick_cooldown_without_timer() {
        let mut lunge = ability(0.5, 1.0);
        assert!(!lunge.tick_cooldown(1.0));
        assert_eq!(*lunge.state(), LungeState::Idle);
    }

    #[test]
    fn test_hitbox_and_reach_spheres() {
        let lunge = ability(0.5, 1.0);
        let position = Vec3::new(1.0, 0.0, 1.0);

        assert_eq!(lunge.hitbox_center(position, Vec3::Z), Vec3::new(1.0, 0.0, 1.5));
        assert_eq!(
            lunge.reach_sphere(position, Vec3::Z),
            (Vec3::new(1.0, 0.0, 6.0), 0.5)
        );
    }
}
