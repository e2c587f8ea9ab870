//! Детерминизм: одинаковый seed → одинаковый мир
//!
//! Critters разбрасываются DeterministicRng, игрок рывком проходит сквозь них.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::Collider;
use rand::Rng;
use skirmish_simulation::collision_layers::enemy_collision_groups;
use skirmish_simulation::*;

fn run_simulation(seed: u64, critter_count: usize, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));

    let player = app
        .world_mut()
        .spawn((Player, Transform::default()))
        .id();
    app.world_mut()
        .entity_mut(player)
        .insert(LungeAbility::new(player));

    let positions: Vec<Vec3> = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        (0..critter_count)
            .map(|_| Vec3::new(rng.rng.gen_range(-5.0..5.0), 0.0, rng.rng.gen_range(-5.0..5.0)))
            .collect()
    };

    for position in positions {
        app.world_mut().spawn((
            Critter,
            Transform::from_translation(position),
            FleeController::new(player),
            Health::new(150),
            Collider::ball(0.4),
            enemy_collision_groups(),
        ));
    }

    for tick in 0..tick_count {
        if tick % 30 == 1 {
            app.world_mut().send_event(AttackPressed { entity: player });
        }
        app.update();
    }

    world_snapshot::<Transform>(app.world_mut())
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let snapshot1 = run_simulation(SEED, 20, 300);
    let snapshot2 = run_simulation(SEED, 20, 300);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 20, 10);
    let snapshot2 = run_simulation(2, 20, 10);

    assert_ne!(snapshot1, snapshot2);
}
